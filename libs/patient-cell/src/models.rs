use serde::{Deserialize, Serialize};

// ==============================================================================
// DIRECTORY
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub full_name: String,
    /// Cédula de identidad.
    pub national_id: String,
    pub phone: String,
    pub visits: u32,
    pub last_visit: String,
    pub initials: String,
}

impl Patient {
    /// Case-insensitive on the name, verbatim on cédula and phone.
    pub fn matches(&self, query: &str) -> bool {
        self.full_name.to_lowercase().contains(&query.to_lowercase())
            || self.national_id.contains(query)
            || self.phone.contains(query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitFrequency {
    Frequent,
    Regular,
    Occasional,
}

impl VisitFrequency {
    pub fn from_visits(visits: u32) -> Self {
        if visits >= 10 {
            VisitFrequency::Frequent
        } else if visits >= 5 {
            VisitFrequency::Regular
        } else {
            VisitFrequency::Occasional
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VisitBadge {
    pub label: String,
    pub frequency: VisitFrequency,
}

impl VisitBadge {
    pub fn new(visits: u32) -> Self {
        let label = if visits == 1 {
            "1 visita".to_string()
        } else {
            format!("{} visitas", visits)
        };
        Self { label, frequency: VisitFrequency::from_visits(visits) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarTone {
    Primary,
    Accent,
}

impl AvatarTone {
    pub fn for_position(index: usize) -> Self {
        if index % 2 == 0 {
            AvatarTone::Primary
        } else {
            AvatarTone::Accent
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientRow {
    pub id: String,
    pub full_name: String,
    pub national_id: String,
    pub phone: String,
    pub initials: String,
    pub last_visit: String,
    pub visit_badge: VisitBadge,
    pub avatar_tone: AvatarTone,
    pub whatsapp_link: Option<String>,
    pub profile_link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientDirectory {
    pub total: usize,
    pub results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub patients: Vec<PatientRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryQuery {
    pub q: Option<String>,
}

// ==============================================================================
// CLINICAL RECORD
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitRecord {
    pub date: String,
    pub service: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Image,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientFile {
    pub name: String,
    pub kind: FileKind,
    pub size: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingVisit {
    pub date: String,
    pub time: String,
    pub service: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub age: u32,
    pub blood_type: String,
    pub history: Vec<VisitRecord>,
    pub files: Vec<PatientFile>,
    pub upcoming: Vec<UpcomingVisit>,
}

// ==============================================================================
// PROFILE VIEW
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryView {
    pub number: usize,
    pub expanded: bool,
    #[serde(flatten)]
    pub record: VisitRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryTab {
    pub entries: Vec<HistoryEntryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilesTab {
    pub files: Vec<PatientFile>,
    pub upload_hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingTab {
    pub visits: Vec<UpcomingVisit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientProfile {
    pub id: String,
    pub full_name: String,
    pub national_id: String,
    pub phone: String,
    pub initials: String,
    pub age: u32,
    pub age_label: String,
    pub blood_type: String,
    pub blood_label: String,
    pub whatsapp_link: Option<String>,
    pub tel_link: Option<String>,
    pub back_link: String,
    pub history: HistoryTab,
    pub files: FilesTab,
    pub upcoming: UpcomingTab,
}
