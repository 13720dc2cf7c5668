use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{MemoryTable, StoreError};

use crate::data;
use crate::models::{
    BackOutcome, BookingConfirmation, BookingError, BookingSession, BookingSessionView,
    BookingStep, ConfirmBookingRequest, PatientDetails, ServiceOption, StepIndicator, StepStatus,
};
use crate::services::calendar::{self, CalendarService};

pub const HOME_PATH: &str = "/";
pub const CONFIRMATION_MESSAGE: &str =
    "Recibirás una confirmación por WhatsApp con los detalles de tu consulta.";

/// Sessions older than this are dropped the next time one starts.
pub const SESSION_TTL_MINUTES: i64 = 120;

/// The four-screen booking wizard. Each visitor gets a session keyed by
/// uuid; nothing is persisted beyond the process.
pub struct BookingService {
    sessions: MemoryTable<BookingSession>,
    catalog: Vec<ServiceOption>,
    calendar: CalendarService,
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingService {
    pub fn new() -> Self {
        Self {
            sessions: MemoryTable::new("booking_sessions"),
            catalog: data::service_catalog(),
            calendar: CalendarService::new(),
        }
    }

    pub fn catalog(&self) -> &[ServiceOption] {
        &self.catalog
    }

    pub fn calendar(&self) -> &CalendarService {
        &self.calendar
    }

    pub async fn start(&self) -> Result<BookingSessionView, BookingError> {
        self.start_at(Utc::now()).await
    }

    pub async fn start_at(&self, now: DateTime<Utc>) -> Result<BookingSessionView, BookingError> {
        let cutoff = now - Duration::minutes(SESSION_TTL_MINUTES);
        let expired = self.sessions.retain(|session| session.created_at > cutoff).await;
        if expired > 0 {
            debug!("Dropped {} expired booking sessions", expired);
        }

        let session = BookingSession::new(now);
        self.sessions.insert(session.id.to_string(), session.clone()).await?;
        info!("Started booking session {}", session.id);
        Ok(self.view(&session))
    }

    pub async fn get_session(&self, id: Uuid) -> Result<BookingSessionView, BookingError> {
        let session = self
            .sessions
            .get(&id.to_string())
            .await
            .ok_or(BookingError::SessionNotFound(id))?;
        Ok(self.view(&session))
    }

    pub async fn select_service(&self, id: Uuid, service_id: u32) -> Result<BookingSessionView, BookingError> {
        if !self.catalog.iter().any(|s| s.id == service_id) {
            return Err(BookingError::UnknownService(service_id));
        }

        let session = self
            .edit(id, BookingStep::Service, |session| {
                session.service_id = Some(service_id);
                Ok(())
            })
            .await?;

        debug!("Session {} selected service {}", id, service_id);
        Ok(self.view(&session))
    }

    pub async fn select_day(
        &self,
        id: Uuid,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<BookingSessionView, BookingError> {
        calendar::ensure_selectable(date, today)?;

        let session = self
            .edit(id, BookingStep::DateTime, |session| {
                session.date = Some(date);
                Ok(())
            })
            .await?;

        debug!("Session {} selected {}", id, date);
        Ok(self.view(&session))
    }

    pub async fn select_slot(&self, id: Uuid, label: &str) -> Result<BookingSessionView, BookingError> {
        let slot = self.calendar.find_slot(label)?;

        let session = self
            .edit(id, BookingStep::DateTime, |session| {
                if session.date.is_none() {
                    return Err(BookingError::DayNotSelected);
                }
                session.slot = Some(slot.label.clone());
                Ok(())
            })
            .await?;

        debug!("Session {} selected slot {}", id, slot.label);
        Ok(self.view(&session))
    }

    /// "Continuar": move forward one step when the current one is complete.
    pub async fn advance(&self, id: Uuid, today: NaiveDate) -> Result<BookingSessionView, BookingError> {
        let session = self
            .mutate(id, |session| {
                if !session.can_advance() {
                    return Err(match session.step {
                        BookingStep::Confirmed => BookingError::AlreadyConfirmed,
                        step => BookingError::IncompleteStep(step),
                    });
                }
                session.step = match session.step {
                    BookingStep::Service => BookingStep::DateTime,
                    BookingStep::DateTime => {
                        if let Some(date) = session.date {
                            calendar::ensure_selectable(date, today)?;
                        }
                        BookingStep::PatientDetails
                    }
                    other => other,
                };
                Ok(())
            })
            .await?;

        debug!("Session {} advanced to {}", id, session.step);
        Ok(self.view(&session))
    }

    pub async fn back(&self, id: Uuid) -> Result<BackOutcome, BookingError> {
        let mut exit_to = None;
        let session = self
            .mutate(id, |session| {
                session.step = match session.step {
                    BookingStep::Service => {
                        exit_to = Some(HOME_PATH.to_string());
                        BookingStep::Service
                    }
                    BookingStep::DateTime => BookingStep::Service,
                    BookingStep::PatientDetails => BookingStep::DateTime,
                    BookingStep::Confirmed => return Err(BookingError::AlreadyConfirmed),
                };
                Ok(())
            })
            .await?;

        Ok(BackOutcome { session: self.view(&session), exit_to })
    }

    pub async fn confirm(
        &self,
        id: Uuid,
        request: ConfirmBookingRequest,
    ) -> Result<BookingSessionView, BookingError> {
        let session = self
            .edit(id, BookingStep::PatientDetails, |session| {
                let patient = validate_details(request)?;
                let service = session
                    .service_id
                    .and_then(|sid| self.catalog.iter().find(|s| s.id == sid))
                    .ok_or(BookingError::IncompleteStep(BookingStep::Service))?;
                let (date, slot) = match (session.date, session.slot.clone()) {
                    (Some(date), Some(slot)) => (date, slot),
                    _ => return Err(BookingError::IncompleteStep(BookingStep::DateTime)),
                };

                session.confirmation = Some(BookingConfirmation {
                    service_name: service.name.clone(),
                    date,
                    when: format!("{} - {}", calendar::day_label(date), slot),
                    slot,
                    patient,
                    message: CONFIRMATION_MESSAGE.to_string(),
                    home_link: HOME_PATH.to_string(),
                });
                session.step = BookingStep::Confirmed;
                Ok(())
            })
            .await?;

        info!("Booking session {} confirmed", id);
        Ok(self.view(&session))
    }

    /// Apply `f` only when the session sits on `expected`.
    async fn edit<F>(&self, id: Uuid, expected: BookingStep, f: F) -> Result<BookingSession, BookingError>
    where
        F: FnOnce(&mut BookingSession) -> Result<(), BookingError>,
    {
        self.mutate(id, |session| {
            match session.step {
                BookingStep::Confirmed => return Err(BookingError::AlreadyConfirmed),
                actual if actual != expected => {
                    return Err(BookingError::WrongStep { expected, actual });
                }
                _ => {}
            }
            f(session)
        })
        .await
    }

    async fn mutate<F>(&self, id: Uuid, f: F) -> Result<BookingSession, BookingError>
    where
        F: FnOnce(&mut BookingSession) -> Result<(), BookingError>,
    {
        let result = self
            .sessions
            .update(&id.to_string(), |session| {
                f(session)?;
                Ok::<_, BookingError>(session.clone())
            })
            .await;

        result.map_err(|err| match err {
            BookingError::Store(StoreError::NotFound { .. }) => BookingError::SessionNotFound(id),
            other => other,
        })
    }

    fn view(&self, session: &BookingSession) -> BookingSessionView {
        let current = session.step.number();
        let steps = BookingStep::WIZARD
            .iter()
            .filter_map(|step| {
                let number = step.number()?;
                let status = match current {
                    None => StepStatus::Completed,
                    Some(n) if number < n => StepStatus::Completed,
                    Some(n) if number == n => StepStatus::Active,
                    Some(_) => StepStatus::Pending,
                };
                Some(StepIndicator { number, label: step.label().to_string(), status })
            })
            .collect();

        BookingSessionView {
            id: session.id,
            step: session.step,
            progress: current.map(|n| format!("{} / {}", n, BookingStep::WIZARD.len())),
            steps,
            can_advance: session.can_advance(),
            service: session
                .service_id
                .and_then(|sid| self.catalog.iter().find(|s| s.id == sid).cloned()),
            date: session.date,
            date_label: session.date.map(calendar::day_label),
            slot: session.slot.clone(),
            confirmation: session.confirmation.clone(),
        }
    }
}

fn validate_details(request: ConfirmBookingRequest) -> Result<PatientDetails, BookingError> {
    let details = PatientDetails {
        full_name: request.full_name.trim().to_string(),
        national_id: request.national_id.trim().to_string(),
        phone: request.phone.trim().to_string(),
    };

    let missing: Vec<&'static str> = [
        ("full_name", &details.full_name),
        ("national_id", &details.national_id),
        ("phone", &details.phone),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(details)
    } else {
        Err(BookingError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_details_trims() {
        let details = validate_details(ConfirmBookingRequest {
            full_name: "  Juan Carlos Pérez ".to_string(),
            national_id: "V-12.345.678".to_string(),
            phone: " +58 412-5559999".to_string(),
        })
        .unwrap();
        assert_eq!(details.full_name, "Juan Carlos Pérez");
        assert_eq!(details.phone, "+58 412-5559999");
    }

    #[test]
    fn test_validate_details_reports_blank_fields() {
        let err = validate_details(ConfirmBookingRequest {
            full_name: "   ".to_string(),
            national_id: "V-1".to_string(),
            phone: String::new(),
        })
        .unwrap_err();
        assert_eq!(err, BookingError::MissingFields(vec!["full_name", "phone"]));
    }
}
