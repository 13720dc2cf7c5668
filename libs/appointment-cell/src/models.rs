use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_database::StoreError;
use shared_models::error::AppError;

// ==============================================================================
// SERVICE CATALOG
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub id: u32,
    pub icon: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration_minutes: u32,
}

// ==============================================================================
// CALENDAR
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based.
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, BookingError> {
        if !(1..=12).contains(&month) {
            return Err(BookingError::InvalidMonth(month));
        }
        let candidate = Self { year, month };
        // The grid needs the 1st of this month and of the next one.
        if candidate.first_day().is_none() || candidate.next().first_day().is_none() {
            return Err(BookingError::InvalidYear(year));
        }
        Ok(candidate)
    }

    pub fn of(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self { year: date.year(), month: date.month() }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisabledReason {
    Past,
    Weekend,
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisabledReason::Past => write!(f, "is in the past"),
            DisabledReason::Weekend => write!(f, "falls on a weekend"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<DisabledReason>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weekday_headers: Vec<String>,
    /// Empty cells before the 1st in a Sunday-first grid.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
    pub previous: YearMonth,
    pub next: YearMonth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSlot {
    pub label: String,
    pub start: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub heading: String,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

// ==============================================================================
// BOOKING WIZARD
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    Service,
    DateTime,
    PatientDetails,
    Confirmed,
}

impl BookingStep {
    pub const WIZARD: [BookingStep; 3] = [
        BookingStep::Service,
        BookingStep::DateTime,
        BookingStep::PatientDetails,
    ];

    /// 1-based position in the wizard; `None` once confirmed.
    pub fn number(self) -> Option<u8> {
        match self {
            BookingStep::Service => Some(1),
            BookingStep::DateTime => Some(2),
            BookingStep::PatientDetails => Some(3),
            BookingStep::Confirmed => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingStep::Service => "Servicio",
            BookingStep::DateTime => "Fecha",
            BookingStep::PatientDetails => "Datos",
            BookingStep::Confirmed => "Confirmada",
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub full_name: String,
    /// Cédula de identidad, e.g. "V-12.345.678".
    pub national_id: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub service_name: String,
    pub date: NaiveDate,
    pub slot: String,
    pub when: String,
    pub patient: PatientDetails,
    pub message: String,
    pub home_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSession {
    pub id: Uuid,
    pub step: BookingStep,
    pub service_id: Option<u32>,
    pub date: Option<NaiveDate>,
    pub slot: Option<String>,
    pub confirmation: Option<BookingConfirmation>,
    pub created_at: DateTime<Utc>,
}

impl BookingSession {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            step: BookingStep::Service,
            service_id: None,
            date: None,
            slot: None,
            confirmation: None,
            created_at,
        }
    }

    /// Whether the "Continuar" action is enabled. The details step only
    /// moves forward through confirmation.
    pub fn can_advance(&self) -> bool {
        match self.step {
            BookingStep::Service => self.service_id.is_some(),
            BookingStep::DateTime => self.date.is_some() && self.slot.is_some(),
            BookingStep::PatientDetails | BookingStep::Confirmed => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepIndicator {
    pub number: u8,
    pub label: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingSessionView {
    pub id: Uuid,
    pub step: BookingStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    pub steps: Vec<StepIndicator>,
    pub can_advance: bool,
    pub service: Option<ServiceOption>,
    pub date: Option<NaiveDate>,
    pub date_label: Option<String>,
    pub slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<BookingConfirmation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackOutcome {
    pub session: BookingSessionView,
    /// Set when "back" on the first step leaves the wizard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_to: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectServiceRequest {
    pub service_id: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectDayRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectSlotRequest {
    pub slot: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmBookingRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub phone: String,
}

// ==============================================================================
// ADMIN DASHBOARD
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Completed,
    Active,
    Pending,
}

impl AppointmentStatus {
    pub fn badge(self) -> &'static str {
        match self {
            AppointmentStatus::Completed => "Completada",
            AppointmentStatus::Active => "En consulta",
            AppointmentStatus::Pending => "Pendiente",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaAppointment {
    pub patient_id: String,
    pub time: String,
    pub patient_name: String,
    pub service: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub trend: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgendaAction {
    pub label: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgendaEntry {
    /// "✓" for completed visits, otherwise the 1-based position.
    pub marker: String,
    pub time: String,
    pub patient_name: String,
    pub service: String,
    pub status: AppointmentStatus,
    pub badge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AgendaAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub date_label: String,
    pub greeting: String,
    pub pending_summary: String,
    pub stats: Vec<StatCard>,
    pub agenda: Vec<AgendaEntry>,
    pub schedule_link: String,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Booking session {0} not found")]
    SessionNotFound(Uuid),

    #[error("Service {0} does not exist")]
    UnknownService(u32),

    #[error("Month {0} is out of range")]
    InvalidMonth(u32),

    #[error("Year {0} is out of range")]
    InvalidYear(i32),

    #[error("{date} {reason}")]
    DateUnavailable { date: NaiveDate, reason: DisabledReason },

    #[error("Time slot {0} does not exist")]
    UnknownSlot(String),

    #[error("Time slot {0} is not available")]
    SlotUnavailable(String),

    #[error("Select a day before choosing a time slot")]
    DayNotSelected,

    #[error("This action belongs to the {expected} step, session is on {actual}")]
    WrongStep { expected: BookingStep, actual: BookingStep },

    #[error("Complete the {0} step before continuing")]
    IncompleteStep(BookingStep),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Booking is already confirmed")]
    AlreadyConfirmed,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::SessionNotFound(_) | BookingError::Store(StoreError::NotFound { .. }) => {
                AppError::NotFound(err.to_string())
            }
            BookingError::WrongStep { .. }
            | BookingError::AlreadyConfirmed
            | BookingError::SlotUnavailable(_) => AppError::Conflict(err.to_string()),
            BookingError::UnknownService(_)
            | BookingError::InvalidMonth(_)
            | BookingError::InvalidYear(_)
            | BookingError::DateUnavailable { .. }
            | BookingError::UnknownSlot(_)
            | BookingError::DayNotSelected
            | BookingError::IncompleteStep(_)
            | BookingError::MissingFields(_) => AppError::ValidationError(err.to_string()),
            BookingError::Store(_) => AppError::Internal(err.to_string()),
        }
    }
}
