//! Catalog, slot grid and today's agenda. All of it is mock data held in memory.

use chrono::{Duration, NaiveTime};

use crate::models::{AgendaAppointment, AppointmentStatus, ServiceOption};

pub const SLOT_STEP_MINUTES: i64 = 30;

/// Morning and afternoon windows, start inclusive, end exclusive.
pub const SLOT_WINDOWS: [(NaiveTime, NaiveTime); 2] = [(hm(8, 0), hm(12, 0)), (hm(14, 0), hm(16, 0))];

pub const UNAVAILABLE_SLOTS: [&str; 3] = ["09:00 AM", "10:00 AM", "02:30 PM"];

pub const TOTAL_PATIENTS: &str = "248";
pub const TOTAL_PATIENTS_TREND: &str = "+5 este mes";
pub const APPOINTMENTS_TREND: &str = "+2 vs ayer";

/// Only for const items, so a bad literal fails the build.
const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid clock time"),
    }
}

pub fn service_catalog() -> Vec<ServiceOption> {
    vec![
        service(1, "stethoscope", "Consulta General", "Evaluación médica completa", "$30", 30),
        service(2, "activity", "Revisión Periódica", "Chequeo de rutina anual", "$25", 20),
        service(3, "heart", "Control Cardiológico", "Evaluación cardiovascular", "$45", 45),
        service(4, "microscope", "Resultados de Examen", "Revisión y análisis de resultados", "$20", 15),
    ]
}

fn service(
    id: u32,
    icon: &str,
    name: &str,
    description: &str,
    price: &str,
    duration_minutes: u32,
) -> ServiceOption {
    ServiceOption {
        id,
        icon: icon.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        duration_minutes,
    }
}

/// Start times of every bookable slot, in order.
pub fn slot_times() -> Vec<NaiveTime> {
    let mut times = Vec::new();
    for (start, end) in SLOT_WINDOWS {
        let mut current = start;
        while current < end {
            times.push(current);
            current += Duration::minutes(SLOT_STEP_MINUTES);
        }
    }
    times
}

pub fn todays_agenda() -> Vec<AgendaAppointment> {
    use AppointmentStatus::*;
    vec![
        agenda("1", "08:30 AM", "María López", "Consulta General", Completed),
        agenda("2", "09:00 AM", "Carlos Méndez", "Revisión Periódica", Active),
        agenda("3", "09:30 AM", "Ana Rodríguez", "Control Cardiológico", Pending),
        agenda("4", "10:00 AM", "Luis García", "Resultados de Examen", Pending),
        agenda("5", "11:00 AM", "Sofía Martínez", "Consulta General", Pending),
        agenda("6", "02:00 PM", "Pedro Jiménez", "Revisión Periódica", Pending),
    ]
}

fn agenda(
    patient_id: &str,
    time: &str,
    patient_name: &str,
    service: &str,
    status: AppointmentStatus,
) -> AgendaAppointment {
    AgendaAppointment {
        patient_id: patient_id.to_string(),
        time: time.to_string(),
        patient_name: patient_name.to_string(),
        service: service.to_string(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_utils::locale::slot_label;

    #[test]
    fn test_slot_grid() {
        let labels: Vec<String> = slot_times().into_iter().map(slot_label).collect();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels.first().map(String::as_str), Some("08:00 AM"));
        assert_eq!(labels[7], "11:30 AM");
        assert_eq!(labels[8], "02:00 PM");
        assert_eq!(labels.last().map(String::as_str), Some("03:30 PM"));
        for unavailable in UNAVAILABLE_SLOTS {
            assert!(labels.iter().any(|l| l == unavailable));
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = service_catalog();
        let mut ids: Vec<u32> = catalog.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
