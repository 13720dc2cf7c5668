use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{
    BackOutcome, BookingSessionView, CalendarMonth, CalendarQuery, ConfirmBookingRequest,
    DashboardView, DaySlots, SelectDayRequest, SelectServiceRequest, SelectSlotRequest,
    ServiceOption, SlotsQuery, YearMonth,
};
use crate::services::{BookingService, DashboardService};

pub struct BookingState {
    pub bookings: BookingService,
    pub config: Arc<AppConfig>,
}

impl BookingState {
    fn today(&self) -> NaiveDate {
        self.config.clinic_now().date_naive()
    }
}

pub struct DashboardState {
    pub dashboard: DashboardService,
    pub config: Arc<AppConfig>,
}

// ==============================================================================
// CATALOG & CALENDAR
// ==============================================================================

#[axum::debug_handler]
pub async fn list_services(State(state): State<Arc<BookingState>>) -> Json<Vec<ServiceOption>> {
    Json(state.bookings.catalog().to_vec())
}

#[axum::debug_handler]
pub async fn get_calendar(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarMonth>, AppError> {
    let today = state.today();
    let current = YearMonth::of(today);
    let month = YearMonth::new(
        query.year.unwrap_or(current.year),
        query.month.unwrap_or(current.month),
    )?;

    let grid = state.bookings.calendar().month_grid(month, today)?;
    Ok(Json(grid))
}

#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<DaySlots>, AppError> {
    let slots = state.bookings.calendar().slots_for(query.date, state.today())?;
    Ok(Json(slots))
}

// ==============================================================================
// BOOKING WIZARD
// ==============================================================================

#[axum::debug_handler]
pub async fn start_session(
    State(state): State<Arc<BookingState>>,
) -> Result<(StatusCode, Json<BookingSessionView>), AppError> {
    let session = state.bookings.start().await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingSessionView>, AppError> {
    let session = state.bookings.get_session(session_id).await?;
    Ok(Json(session))
}

#[axum::debug_handler]
pub async fn select_service(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectServiceRequest>,
) -> Result<Json<BookingSessionView>, AppError> {
    let session = state.bookings.select_service(session_id, request.service_id).await?;
    Ok(Json(session))
}

#[axum::debug_handler]
pub async fn select_day(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectDayRequest>,
) -> Result<Json<BookingSessionView>, AppError> {
    let session = state
        .bookings
        .select_day(session_id, request.date, state.today())
        .await?;
    Ok(Json(session))
}

#[axum::debug_handler]
pub async fn select_slot(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectSlotRequest>,
) -> Result<Json<BookingSessionView>, AppError> {
    let session = state.bookings.select_slot(session_id, &request.slot).await?;
    Ok(Json(session))
}

#[axum::debug_handler]
pub async fn next_step(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingSessionView>, AppError> {
    let session = state.bookings.advance(session_id, state.today()).await?;
    Ok(Json(session))
}

#[axum::debug_handler]
pub async fn previous_step(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BackOutcome>, AppError> {
    let outcome = state.bookings.back(session_id).await?;
    if let Some(exit) = &outcome.exit_to {
        debug!("Session {} left the wizard to {}", session_id, exit);
    }
    Ok(Json(outcome))
}

#[axum::debug_handler]
pub async fn confirm_booking(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ConfirmBookingRequest>,
) -> Result<Json<BookingSessionView>, AppError> {
    let session = state.bookings.confirm(session_id, request).await?;
    Ok(Json(session))
}

// ==============================================================================
// ADMIN DASHBOARD
// ==============================================================================

#[axum::debug_handler]
pub async fn get_dashboard(State(state): State<Arc<DashboardState>>) -> Json<DashboardView> {
    Json(state.dashboard.get_dashboard(state.config.clinic_now()).await)
}
