use std::sync::Arc;

use axum::{
    http::Uri,
    response::Redirect,
    routing::get,
    Router,
};

use appointment_cell::{booking_routes, dashboard_routes};
use doctor_cell::{doctor_routes, schedule_routes};
use patient_cell::patient_routes;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::navigation::get_navigation;

pub fn create_router(config: Arc<AppConfig>) -> Router {
    let landing = format!("/doctors/{}", config.default_doctor_slug);

    Router::new()
        .route(
            "/",
            get(move || {
                let landing = landing.clone();
                async move { Redirect::temporary(&landing) }
            }),
        )
        .route("/admin", get(|| async { Redirect::temporary("/admin/dashboard") }))
        .route("/admin/navigation", get(get_navigation))
        .nest("/doctors", doctor_routes(config.clone()))
        .nest("/booking", booking_routes(config.clone()))
        .nest("/admin/dashboard", dashboard_routes(config.clone()))
        .nest("/admin/patients", patient_routes())
        .nest("/admin/schedule", schedule_routes())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use shared_utils::test_utils::{get as get_request, send, TestConfig};

    fn app() -> Router {
        create_router(TestConfig::default().to_arc())
    }

    #[tokio::test]
    async fn test_root_redirects_to_default_doctor() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/doctors/dra-rosana-arteaga");
    }

    #[tokio::test]
    async fn test_cells_are_mounted() {
        let app = app();

        let (status, body) = send(&app, get_request("/doctors/dra-rosana-arteaga")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["links"]["booking"], "/booking");

        let (status, _) = send(&app, get_request("/booking/services")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, get_request("/admin/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["agenda"].as_array().map(Vec::len), Some(6));

        let (status, body) = send(&app, get_request("/admin/patients/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["full_name"], "Carlos Méndez");

        let (status, body) = send(&app, get_request("/admin/schedule")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active_days"], 4);
    }

    #[tokio::test]
    async fn test_navigation_endpoint() {
        let (status, body) = send(&app(), get_request("/admin/navigation?path=/admin/patients/1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][1]["label"], "Pacientes");
        assert_eq!(body["items"][1]["active"], true);
        assert_eq!(body["items"][0]["active"], false);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send(&app(), get_request("/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No route for /nope");
    }
}
