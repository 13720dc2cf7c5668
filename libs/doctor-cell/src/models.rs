use std::fmt;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use shared_database::StoreError;
use shared_models::error::AppError;

// ==============================================================================
// DOCTOR PROFILE
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub slug: String,
    pub name: String,
    pub specialty: String,
    pub subtitle: String,
    pub clinic_name: String,
    pub avatar_url: String,
    /// The stats strip stays hidden until the numbers come from real data.
    pub show_stats: bool,
    pub stats: Vec<ProfileStat>,
    pub specialties: Vec<Specialty>,
    pub reviews: Vec<Review>,
    pub rating: RatingSummary,
    pub office: OfficeInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub icon: String,
    pub name: String,
    pub duration_minutes: u32,
    pub price: Option<String>,
}

impl Specialty {
    /// "30 min • $20", or just "30 min" when unpriced.
    pub fn detail(&self) -> String {
        match &self.price {
            Some(price) => format!("{} min • {}", self.duration_minutes, price),
            None => format!("{} min", self.duration_minutes),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average: f32,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeInfo {
    pub name: String,
    pub address: String,
    pub hours: String,
    pub phone: String,
}

// Landing page DTOs

#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub slug: String,
    pub clinic_name: String,
    pub name: String,
    pub specialty: String,
    pub subtitle: String,
    pub avatar_url: String,
    pub rating: RatingSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<ProfileStat>>,
    pub office: OfficeCard,
    pub specialties: Vec<SpecialtyCard>,
    pub reviews: Vec<ReviewCard>,
    pub links: LandingLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfficeCard {
    pub name: String,
    pub address: String,
    pub hours: String,
    pub phone: String,
    pub tel_link: Option<String>,
    pub whatsapp_link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecialtyCard {
    pub icon: String,
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewCard {
    pub name: String,
    pub initial: String,
    pub stars: u8,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingLinks {
    pub booking: String,
    pub admin: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileError {
    #[error("Doctor profile {0} not found")]
    NotFound(String),
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

// ==============================================================================
// WEEKLY SCHEDULE
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicDay {
    #[serde(alias = "lunes")]
    Monday,
    #[serde(alias = "martes")]
    Tuesday,
    #[serde(alias = "miercoles", alias = "miércoles")]
    Wednesday,
    #[serde(alias = "jueves")]
    Thursday,
    #[serde(alias = "viernes")]
    Friday,
}

impl ClinicDay {
    pub const ALL: [ClinicDay; 5] = [
        ClinicDay::Monday,
        ClinicDay::Tuesday,
        ClinicDay::Wednesday,
        ClinicDay::Thursday,
        ClinicDay::Friday,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ClinicDay::Monday => "monday",
            ClinicDay::Tuesday => "tuesday",
            ClinicDay::Wednesday => "wednesday",
            ClinicDay::Thursday => "thursday",
            ClinicDay::Friday => "friday",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClinicDay::Monday => "Lunes",
            ClinicDay::Tuesday => "Martes",
            ClinicDay::Wednesday => "Miércoles",
            ClinicDay::Thursday => "Jueves",
            ClinicDay::Friday => "Viernes",
        }
    }

    /// First three characters of the label: "Lun", "Mié", ...
    pub fn short_label(self) -> String {
        self.label().chars().take(3).collect()
    }
}

impl fmt::Display for ClinicDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// `HH:MM` on the wire.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaySchedule {
    pub active: bool,
    pub blocks: Vec<TimeBlock>,
}

impl DaySchedule {
    pub fn status_line(&self) -> String {
        if !self.active {
            return "Día no disponible".to_string();
        }
        match self.blocks.len() {
            0 => "Sin horarios configurados".to_string(),
            1 => "1 bloque de atención".to_string(),
            n => format!("{} bloques de atención", n),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub appointment_duration_minutes: u32,
    pub saved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockField {
    Start,
    End,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlockRequest {
    pub field: BlockField,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetDurationRequest {
    pub minutes: u32,
}

// Schedule editor DTOs

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView {
    pub active_days: usize,
    pub days: Vec<DayView>,
    pub time_options: Vec<String>,
    pub duration_options: Vec<u32>,
    pub appointment_duration_minutes: u32,
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub day: ClinicDay,
    pub label: String,
    pub short_label: String,
    pub active: bool,
    pub status: String,
    pub blocks: Vec<BlockView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockView {
    pub id: String,
    pub start: String,
    pub end: String,
    /// Valid choices for `end`: every option strictly after `start`.
    pub end_options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("{0} is not an active day")]
    DayInactive(ClinicDay),

    #[error("Time block {0} not found")]
    BlockNotFound(String),

    #[error("{0} is not one of the schedule time options")]
    InvalidTime(String),

    #[error("Block must start before it ends ({start} - {end})")]
    InvalidRange { start: String, end: String },

    #[error("{0} minutes is not an allowed appointment duration")]
    InvalidDuration(u32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::BlockNotFound(_) | ScheduleError::Store(StoreError::NotFound { .. }) => {
                AppError::NotFound(err.to_string())
            }
            ScheduleError::DayInactive(_) => AppError::Conflict(err.to_string()),
            ScheduleError::InvalidTime(_)
            | ScheduleError::InvalidRange { .. }
            | ScheduleError::InvalidDuration(_) => AppError::ValidationError(err.to_string()),
            ScheduleError::Store(_) => AppError::Internal(err.to_string()),
        }
    }
}
