use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, patch, put},
};

use shared_config::AppConfig;

use crate::handlers;
use crate::services::{ProfileService, ScheduleService};

/// Public doctor landing pages, nested under `/doctors`.
pub fn doctor_routes(config: Arc<AppConfig>) -> Router {
    let profiles = Arc::new(ProfileService::new(&config));

    Router::new()
        .route("/{slug}", get(handlers::get_landing_page))
        .with_state(profiles)
}

/// Admin schedule editor, nested under `/admin/schedule`.
pub fn schedule_routes() -> Router {
    let schedule = Arc::new(ScheduleService::new());

    Router::new()
        .route("/", get(handlers::get_schedule))
        .route("/save", post(handlers::save_schedule))
        .route("/duration", put(handlers::set_duration))
        .route("/days/{day}/toggle", post(handlers::toggle_day))
        .route("/days/{day}/blocks", post(handlers::add_block))
        .route(
            "/days/{day}/blocks/{block_id}",
            patch(handlers::update_block).delete(handlers::delete_block),
        )
        .with_state(schedule)
}
