use tracing::debug;

use shared_database::MemoryTable;
use shared_utils::{tel_link, whatsapp_link};

use crate::data;
use crate::models::{
    AvatarTone, ClinicalRecord, DirectoryQuery, FilesTab, HistoryEntryView, HistoryTab, Patient,
    PatientDirectory, PatientProfile, PatientRow, UpcomingTab, VisitBadge,
};

pub const PATIENTS_PATH: &str = "/admin/patients";
pub const UPLOAD_HINT: &str = "PDF, JPG, PNG hasta 20MB";

const NO_HISTORY: &str = "Sin historial registrado";
const NO_FILES: &str = "Sin archivos adjuntos";
const NO_UPCOMING: &str = "Sin citas próximas";

pub struct PatientService {
    patients: MemoryTable<Patient>,
    records: MemoryTable<ClinicalRecord>,
}

impl Default for PatientService {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientService {
    pub fn new() -> Self {
        let patients = data::patients().into_iter().map(|p| (p.id.clone(), p));

        Self {
            patients: MemoryTable::seeded("patients", patients),
            records: MemoryTable::seeded("clinical_records", data::clinical_records()),
        }
    }

    pub async fn search(&self, query: &DirectoryQuery) -> PatientDirectory {
        let all = self.patients.list().await;
        let needle = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

        let patients: Vec<PatientRow> = all
            .iter()
            .filter(|p| needle.map_or(true, |q| p.matches(q)))
            .enumerate()
            .map(|(index, patient)| directory_row(index, patient))
            .collect();

        debug!("Patient search {:?} matched {} of {}", needle, patients.len(), all.len());

        PatientDirectory {
            total: all.len(),
            results: patients.len(),
            empty_message: match needle {
                Some(q) if patients.is_empty() => {
                    Some(format!("No se encontraron pacientes para \"{}\"", q))
                }
                None if patients.is_empty() => Some("No se encontraron pacientes".to_string()),
                _ => None,
            },
            query: needle.map(str::to_string),
            patients,
        }
    }

    /// Unknown ids get a placeholder profile rather than an error.
    pub async fn get_profile(&self, id: &str) -> PatientProfile {
        let patient = match self.patients.get(id).await {
            Some(patient) => patient,
            None => {
                debug!("Patient {} not in directory, using placeholder", id);
                data::placeholder_patient(id)
            }
        };
        let record = self
            .records
            .get(id)
            .await
            .unwrap_or_else(data::placeholder_record);

        build_profile(patient, record)
    }
}

fn directory_row(index: usize, patient: &Patient) -> PatientRow {
    PatientRow {
        id: patient.id.clone(),
        full_name: patient.full_name.clone(),
        national_id: patient.national_id.clone(),
        phone: patient.phone.clone(),
        initials: patient.initials.clone(),
        last_visit: patient.last_visit.clone(),
        visit_badge: VisitBadge::new(patient.visits),
        avatar_tone: AvatarTone::for_position(index),
        whatsapp_link: whatsapp_link(&patient.phone),
        profile_link: format!("{}/{}", PATIENTS_PATH, patient.id),
    }
}

fn build_profile(patient: Patient, record: ClinicalRecord) -> PatientProfile {
    let entries: Vec<HistoryEntryView> = record
        .history
        .into_iter()
        .enumerate()
        .map(|(i, record)| HistoryEntryView { number: i + 1, expanded: i == 0, record })
        .collect();

    PatientProfile {
        whatsapp_link: whatsapp_link(&patient.phone),
        tel_link: tel_link(&patient.phone),
        age_label: format!("{} años", record.age),
        blood_label: format!("Sangre {}", record.blood_type),
        age: record.age,
        blood_type: record.blood_type,
        back_link: PATIENTS_PATH.to_string(),
        history: HistoryTab {
            empty_message: entries.is_empty().then(|| NO_HISTORY.to_string()),
            entries,
        },
        files: FilesTab {
            empty_message: record.files.is_empty().then(|| NO_FILES.to_string()),
            files: record.files,
            upload_hint: UPLOAD_HINT.to_string(),
        },
        upcoming: UpcomingTab {
            empty_message: record.upcoming.is_empty().then(|| NO_UPCOMING.to_string()),
            visits: record.upcoming,
        },
        id: patient.id,
        full_name: patient.full_name,
        national_id: patient.national_id,
        phone: patient.phone,
        initials: patient.initials,
    }
}
