// libs/doctor-cell/tests/handlers_test.rs

use http::{Method, StatusCode};
use serde_json::json;

use doctor_cell::{doctor_routes, schedule_routes};
use shared_utils::test_utils::{get, json_request, post_empty, send, TestConfig};

#[tokio::test]
async fn landing_page_for_known_and_unknown_slug() {
    let router = doctor_routes(TestConfig::default().to_arc());

    let (status, body) = send(&router, get("/dra-rosana-arteaga")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Dra. Rosana Arteaga");
    assert_eq!(body["rating"]["count"], 128);
    assert!(body.get("stats").is_none());
    assert_eq!(body["specialties"].as_array().unwrap().len(), 3);
    assert_eq!(body["links"]["admin"], "/admin");

    let (status, body) = send(&router, get("/dr-desconocido")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "dra-rosana-arteaga");
}

#[tokio::test]
async fn landing_page_with_missing_default_profile() {
    let config = TestConfig {
        default_doctor_slug: "dr-ausente".to_string(),
        ..TestConfig::default()
    };
    let router = doctor_routes(config.to_arc());

    let (status, body) = send(&router, get("/otro")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Doctor profile dr-ausente not found");
}

#[tokio::test]
async fn schedule_editor_round() {
    let router = schedule_routes();

    let (status, body) = send(&router, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_days"], 4);

    let (status, body) = send(&router, post_empty("/days/jueves/toggle")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_days"], 5);
    assert_eq!(body["days"][3]["status"], "Sin horarios configurados");

    let (status, body) = send(&router, post_empty("/days/thursday/blocks")).await;
    assert_eq!(status, StatusCode::CREATED);
    let block = &body["days"][3]["blocks"][0];
    assert_eq!(block["start"], "08:00");
    let block_id = block["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &router,
        json_request(
            Method::PATCH,
            &format!("/days/thursday/blocks/{}", block_id),
            json!({ "field": "end", "value": "13:30" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"][3]["blocks"][0]["end"], "13:30");

    let (status, body) = send(
        &router,
        json_request(Method::DELETE, &format!("/days/thursday/blocks/{}", block_id), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"][3]["blocks"].as_array().unwrap().len(), 0);

    let (status, body) = send(&router, post_empty("/save")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "¡Guardado!");
}

#[tokio::test]
async fn schedule_editor_errors() {
    let router = schedule_routes();

    let (status, _) = send(&router, post_empty("/days/thursday/blocks")).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &router,
        json_request(Method::PATCH, "/days/monday/blocks/1", json!({ "field": "start", "value": "12:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Block must start before it ends (12:00 - 12:00)");

    let (status, _) = send(
        &router,
        json_request(Method::DELETE, "/days/monday/blocks/nope", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &router,
        json_request(Method::PUT, "/duration", json!({ "minutes": 90 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&router, post_empty("/days/saturday/toggle")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
