use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::{get_patient_profile, search_patients};
use crate::services::PatientService;

/// Admin patient directory and profiles, nested under `/admin/patients`.
pub fn patient_routes() -> Router {
    let patients = Arc::new(PatientService::new());

    Router::new()
        .route("/", get(search_patients))
        .route("/{id}", get(get_patient_profile))
        .with_state(patients)
}
