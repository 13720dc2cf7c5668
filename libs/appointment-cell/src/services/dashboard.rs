use chrono::{DateTime, FixedOffset, Timelike};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::MemoryTable;
use shared_utils::locale::long_date;

use crate::data::{self, APPOINTMENTS_TREND, TOTAL_PATIENTS, TOTAL_PATIENTS_TREND};
use crate::models::{
    AgendaAction, AgendaAppointment, AgendaEntry, AppointmentStatus, DashboardView, StatCard,
};

pub const PATIENTS_PATH: &str = "/admin/patients";
pub const SCHEDULE_PATH: &str = "/admin/schedule";

/// Today's agenda and the summary cards on the admin home screen.
pub struct DashboardService {
    agenda: MemoryTable<AgendaAppointment>,
    doctor_name: String,
}

impl DashboardService {
    pub fn new(config: &AppConfig) -> Self {
        let agenda = data::todays_agenda()
            .into_iter()
            .map(|appointment| (appointment.patient_id.clone(), appointment));

        Self {
            agenda: MemoryTable::seeded("todays_agenda", agenda),
            doctor_name: config.doctor_display_name.clone(),
        }
    }

    pub async fn get_dashboard(&self, now: DateTime<FixedOffset>) -> DashboardView {
        let agenda = self.agenda.list().await;
        let total = agenda.len();
        let completed = agenda
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .count();
        let pending = total - completed;

        debug!("Dashboard for {}: {} appointments, {} pending", now.date_naive(), total, pending);

        DashboardView {
            date_label: long_date(now.date_naive()),
            greeting: format!("{}, {} 👋", greeting(now.hour()), self.doctor_name),
            pending_summary: pending_summary(pending),
            stats: vec![
                stat("Citas de Hoy", total.to_string(), APPOINTMENTS_TREND.to_string()),
                stat("Pacientes Totales", TOTAL_PATIENTS.to_string(), TOTAL_PATIENTS_TREND.to_string()),
                stat("Completadas", completed.to_string(), share_of_day(completed, total)),
                stat("Pendientes", pending.to_string(), share_of_day(pending, total)),
            ],
            agenda: agenda.iter().enumerate().map(|(i, a)| agenda_entry(i, a)).collect(),
            schedule_link: SCHEDULE_PATH.to_string(),
        }
    }
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Buenos días",
        12..=18 => "Buenas tardes",
        _ => "Buenas noches",
    }
}

fn pending_summary(pending: usize) -> String {
    match pending {
        0 => "No tienes citas pendientes hoy".to_string(),
        1 => "Tienes 1 cita pendiente hoy".to_string(),
        n => format!("Tienes {} citas pendientes hoy", n),
    }
}

/// Floored percentage, e.g. 1 of 6 is "16% del día".
fn share_of_day(part: usize, total: usize) -> String {
    let pct = if total == 0 { 0 } else { part * 100 / total };
    format!("{}% del día", pct)
}

fn stat(label: &str, value: String, trend: String) -> StatCard {
    StatCard { label: label.to_string(), value, trend }
}

fn agenda_entry(index: usize, appointment: &AgendaAppointment) -> AgendaEntry {
    let marker = match appointment.status {
        AppointmentStatus::Completed => "✓".to_string(),
        _ => (index + 1).to_string(),
    };
    let action = match appointment.status {
        AppointmentStatus::Completed => None,
        AppointmentStatus::Active => Some("En curso"),
        AppointmentStatus::Pending => Some("Iniciar"),
    }
    .map(|label| AgendaAction {
        label: label.to_string(),
        link: format!("{}/{}", PATIENTS_PATH, appointment.patient_id),
    });

    AgendaEntry {
        marker,
        time: appointment.time.clone(),
        patient_name: appointment.patient_name.clone(),
        service: appointment.service.clone(),
        status: appointment.status,
        badge: appointment.status.badge().to_string(),
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0), "Buenos días");
        assert_eq!(greeting(11), "Buenos días");
        assert_eq!(greeting(12), "Buenas tardes");
        assert_eq!(greeting(18), "Buenas tardes");
        assert_eq!(greeting(19), "Buenas noches");
        assert_eq!(greeting(23), "Buenas noches");
    }

    #[test]
    fn test_share_of_day_floors() {
        assert_eq!(share_of_day(1, 6), "16% del día");
        assert_eq!(share_of_day(5, 6), "83% del día");
        assert_eq!(share_of_day(0, 0), "0% del día");
    }

    #[test]
    fn test_pending_summary_wording() {
        assert_eq!(pending_summary(0), "No tienes citas pendientes hoy");
        assert_eq!(pending_summary(1), "Tienes 1 cita pendiente hoy");
        assert_eq!(pending_summary(5), "Tienes 5 citas pendientes hoy");
    }
}
