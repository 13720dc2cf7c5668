use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use tracing::debug;

use shared_utils::locale::{month_name, slot_label, MONTHS, WEEKDAYS_SHORT};

use crate::data::{self, UNAVAILABLE_SLOTS};
use crate::models::{
    BookingError, CalendarDay, CalendarMonth, DaySlots, DisabledReason, TimeSlot, YearMonth,
};

/// Month grids and the daily slot list shown in the date/time step.
pub struct CalendarService {
    slot_times: Vec<NaiveTime>,
    unavailable: Vec<String>,
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarService {
    pub fn new() -> Self {
        Self {
            slot_times: data::slot_times(),
            unavailable: UNAVAILABLE_SLOTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn month_grid(&self, month: YearMonth, today: NaiveDate) -> Result<CalendarMonth, BookingError> {
        let first = month.first_day().ok_or(BookingError::InvalidYear(month.year))?;
        let name = month_name(month.month).ok_or(BookingError::InvalidMonth(month.month))?;

        let days = first
            .iter_days()
            .take(month.days_in_month() as usize)
            .map(|date| {
                let disabled_reason = day_status(date, today);
                CalendarDay {
                    day: date.day(),
                    date,
                    is_today: date == today,
                    disabled: disabled_reason.is_some(),
                    disabled_reason,
                }
            })
            .collect();

        debug!("Built calendar grid for {}-{:02}", month.year, month.month);

        Ok(CalendarMonth {
            year: month.year,
            month: month.month,
            title: format!("{} {}", name, month.year),
            weekday_headers: WEEKDAYS_SHORT.iter().map(|d| d.to_string()).collect(),
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
            previous: month.previous(),
            next: month.next(),
        })
    }

    pub fn time_slots(&self) -> Vec<TimeSlot> {
        self.slot_times
            .iter()
            .map(|time| {
                let label = slot_label(*time);
                TimeSlot {
                    available: !self.unavailable.contains(&label),
                    start: time.format("%H:%M").to_string(),
                    label,
                }
            })
            .collect()
    }

    /// Slots for a selectable day. Past and weekend days have none.
    pub fn slots_for(&self, date: NaiveDate, today: NaiveDate) -> Result<DaySlots, BookingError> {
        ensure_selectable(date, today)?;
        Ok(DaySlots {
            date,
            heading: format!("Horarios disponibles: {}", day_label(date)),
            slots: self.time_slots(),
        })
    }

    /// Resolve a slot label the way the picker shows it, e.g. "08:30 AM".
    pub fn find_slot(&self, label: &str) -> Result<TimeSlot, BookingError> {
        let label = label.trim();
        let slot = self
            .time_slots()
            .into_iter()
            .find(|slot| slot.label.eq_ignore_ascii_case(label))
            .ok_or_else(|| BookingError::UnknownSlot(label.to_string()))?;

        if !slot.available {
            return Err(BookingError::SlotUnavailable(slot.label));
        }
        Ok(slot)
    }
}

/// Why a day can't be picked. Past wins over weekend.
pub fn day_status(date: NaiveDate, today: NaiveDate) -> Option<DisabledReason> {
    if date < today {
        Some(DisabledReason::Past)
    } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        Some(DisabledReason::Weekend)
    } else {
        None
    }
}

pub fn ensure_selectable(date: NaiveDate, today: NaiveDate) -> Result<(), BookingError> {
    match day_status(date, today) {
        Some(reason) => Err(BookingError::DateUnavailable { date, reason }),
        None => Ok(()),
    }
}

/// "20 de Octubre"
pub fn day_label(date: NaiveDate) -> String {
    let month = MONTHS.get(date.month0() as usize).copied().unwrap_or_default();
    format!("{} de {}", date.day(), month)
}
