//! Spanish calendar vocabulary used across the clinic screens.

use chrono::{Datelike, NaiveDate, NaiveTime};

pub const MONTHS: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
    "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
];

/// Sunday first, matching the booking calendar grid.
pub const WEEKDAYS_SHORT: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

const WEEKDAYS_LONG: [&str; 7] = [
    "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
];

/// `month` is 1-based.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// "sábado, 17 de octubre"
pub fn long_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_LONG[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[date.month0() as usize].to_lowercase();
    format!("{}, {} de {}", weekday, date.day(), month)
}

/// "08:00 AM", "02:30 PM"
pub fn slot_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), Some("Enero"));
        assert_eq!(month_name(12), Some("Diciembre"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(long_date(date), "sábado, 17 de octubre");
    }

    #[test]
    fn test_slot_label() {
        assert_eq!(slot_label(NaiveTime::from_hms_opt(8, 0, 0).unwrap()), "08:00 AM");
        assert_eq!(slot_label(NaiveTime::from_hms_opt(14, 30, 0).unwrap()), "02:30 PM");
    }
}
