use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{ClinicDay, LandingPage, ScheduleView, SetDurationRequest, UpdateBlockRequest};
use crate::services::{ProfileService, ScheduleService};

// ==============================================================================
// PUBLIC LANDING PAGE
// ==============================================================================

#[axum::debug_handler]
pub async fn get_landing_page(
    State(profiles): State<Arc<ProfileService>>,
    Path(slug): Path<String>,
) -> Result<Json<LandingPage>, AppError> {
    debug!("Rendering landing page for {}", slug);
    let landing = profiles.get_landing(Some(&slug)).await?;
    Ok(Json(landing))
}

// ==============================================================================
// ADMIN SCHEDULE EDITOR
// ==============================================================================

#[axum::debug_handler]
pub async fn get_schedule(
    State(schedule): State<Arc<ScheduleService>>,
) -> Json<ScheduleView> {
    Json(schedule.get_schedule().await)
}

#[axum::debug_handler]
pub async fn toggle_day(
    State(schedule): State<Arc<ScheduleService>>,
    Path(day): Path<ClinicDay>,
) -> Result<Json<ScheduleView>, AppError> {
    schedule.toggle_day(day).await?;
    Ok(Json(schedule.get_schedule().await))
}

#[axum::debug_handler]
pub async fn add_block(
    State(schedule): State<Arc<ScheduleService>>,
    Path(day): Path<ClinicDay>,
) -> Result<(StatusCode, Json<ScheduleView>), AppError> {
    schedule.add_block(day).await?;
    Ok((StatusCode::CREATED, Json(schedule.get_schedule().await)))
}

#[axum::debug_handler]
pub async fn update_block(
    State(schedule): State<Arc<ScheduleService>>,
    Path((day, block_id)): Path<(ClinicDay, String)>,
    Json(request): Json<UpdateBlockRequest>,
) -> Result<Json<ScheduleView>, AppError> {
    schedule.update_block(day, &block_id, request).await?;
    Ok(Json(schedule.get_schedule().await))
}

#[axum::debug_handler]
pub async fn delete_block(
    State(schedule): State<Arc<ScheduleService>>,
    Path((day, block_id)): Path<(ClinicDay, String)>,
) -> Result<Json<ScheduleView>, AppError> {
    schedule.delete_block(day, &block_id).await?;
    Ok(Json(schedule.get_schedule().await))
}

#[axum::debug_handler]
pub async fn set_duration(
    State(schedule): State<Arc<ScheduleService>>,
    Json(request): Json<SetDurationRequest>,
) -> Result<Json<ScheduleView>, AppError> {
    schedule.set_appointment_duration(request.minutes).await?;
    Ok(Json(schedule.get_schedule().await))
}

#[axum::debug_handler]
pub async fn save_schedule(
    State(schedule): State<Arc<ScheduleService>>,
) -> Json<ScheduleView> {
    Json(schedule.save().await)
}
