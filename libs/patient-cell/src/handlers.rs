use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::models::{DirectoryQuery, PatientDirectory, PatientProfile};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn search_patients(
    State(patients): State<Arc<PatientService>>,
    Query(query): Query<DirectoryQuery>,
) -> Json<PatientDirectory> {
    Json(patients.search(&query).await)
}

#[axum::debug_handler]
pub async fn get_patient_profile(
    State(patients): State<Arc<PatientService>>,
    Path(patient_id): Path<String>,
) -> Json<PatientProfile> {
    Json(patients.get_profile(&patient_id).await)
}
