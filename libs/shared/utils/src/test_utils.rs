use std::sync::Arc;

use axum::{body::Body, Router};
use http::{header, Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use shared_config::AppConfig;

pub struct TestConfig {
    pub default_doctor_slug: String,
    pub doctor_display_name: String,
    pub clinic_utc_offset_minutes: i32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            default_doctor_slug: "dra-rosana-arteaga".to_string(),
            doctor_display_name: "Dra. García".to_string(),
            clinic_utc_offset_minutes: 0,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            default_doctor_slug: self.default_doctor_slug.clone(),
            doctor_display_name: self.doctor_display_name.clone(),
            clinic_utc_offset_minutes: self.clinic_utc_offset_minutes,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("valid test request")
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .expect("valid test request")
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid test request")
}

/// Drives one request through `router` and decodes the JSON body.
/// Empty bodies come back as `Value::Null`; plain-text rejections from axum
/// extractors come back as `Value::String`.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, body)
}
