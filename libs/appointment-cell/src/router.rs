use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};

use shared_config::AppConfig;

use crate::handlers::{self, BookingState, DashboardState};
use crate::services::{BookingService, DashboardService};

/// Public booking wizard, nested under `/booking`.
pub fn booking_routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(BookingState { bookings: BookingService::new(), config });

    Router::new()
        .route("/services", get(handlers::list_services))
        .route("/calendar", get(handlers::get_calendar))
        .route("/slots", get(handlers::get_slots))
        .route("/sessions", post(handlers::start_session))
        .route("/sessions/{session_id}", get(handlers::get_session))
        .route("/sessions/{session_id}/service", put(handlers::select_service))
        .route("/sessions/{session_id}/day", put(handlers::select_day))
        .route("/sessions/{session_id}/slot", put(handlers::select_slot))
        .route("/sessions/{session_id}/next", post(handlers::next_step))
        .route("/sessions/{session_id}/back", post(handlers::previous_step))
        .route("/sessions/{session_id}/confirm", post(handlers::confirm_booking))
        .with_state(state)
}

/// Admin home screen, nested under `/admin/dashboard`.
pub fn dashboard_routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(DashboardState { dashboard: DashboardService::new(&config), config });

    Router::new()
        .route("/", get(handlers::get_dashboard))
        .with_state(state)
}
