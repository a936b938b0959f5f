//! Router-level tests: drive the REST surface over the in-memory backend
//! without binding a socket.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use inventa_server::{
    api, config::AppConfig, repository::MemInventory, services::Services, AppState,
};

fn test_app() -> Router {
    let repository = Arc::new(MemInventory::new());
    let config = AppConfig::default();
    let services = Services::new(repository, &config.translate);
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };
    api::create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = test_app();
    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn equipment_list_starts_empty() {
    let app = test_app();
    let response = app.oneshot(get_request("/api/equipment")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let app = test_app();

    let payload = json!({
        "inventory_code": "INV-1001",
        "equipment_name": "Aquilion CT",
        "equipment_type_id": 2,
        "manufacturer_id": 1,
        "model_number": "Aquilion ONE",
        "serial_number": "CT-4711",
        "year_manufactured": "2020",
        "purchase_price": "950000.00",
        "current_value": "640000.00",
        "ownership_type": "owned",
        "room_id": 1,
        "equipment_status": "active",
        "condition_rating": 4
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/equipment", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = response_json(response).await;
    assert_eq!(created["equipment_id"], 1);
    assert_eq!(created["type_code"], "CT");
    assert_eq!(created["manufacturer_name"], "GE Healthcare");

    let response = app.oneshot(get_request("/api/equipment")).await.unwrap();
    let listed = response_json(response).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["inventory_code"], "INV-1001");
}

#[tokio::test]
async fn create_defaults_blank_numeric_text() {
    let app = test_app();

    let payload = json!({
        "inventory_code": "INV-1002",
        "equipment_name": "Spare pump",
        "year_manufactured": "",
        "purchase_price": "",
        "ownership_type": "owned",
        "equipment_status": "active"
    });
    let response = app
        .oneshot(json_request("POST", "/api/equipment", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = response_json(response).await;
    assert_eq!(created["purchase_price"], "0");
    let current_year = chrono::Datelike::year(&chrono::Utc::now());
    assert_eq!(created["year_manufactured"], current_year);
}

#[tokio::test]
async fn partial_update_leaves_other_fields_unchanged() {
    let app = test_app();

    let payload = json!({
        "inventory_code": "INV-1003",
        "equipment_name": "Ventilator",
        "condition_rating": 5,
        "ownership_type": "leased",
        "equipment_status": "active"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/equipment", payload))
        .await
        .unwrap();
    let created = response_json(response).await;
    let id = created["equipment_id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/equipment/{}", id),
            json!({ "condition_rating": 3 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = response_json(response).await;
    assert_eq!(updated["condition_rating"], 3);
    assert_eq!(updated["equipment_name"], "Ventilator");
    assert_eq!(updated["ownership_type"], "leased");
}

#[tokio::test]
async fn update_unknown_id_is_404_with_error_body() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/equipment/42",
            json!({ "condition_rating": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn delete_then_list_no_longer_contains_record() {
    let app = test_app();

    let payload = json!({
        "inventory_code": "INV-1004",
        "equipment_name": "Old centrifuge",
        "ownership_type": "owned",
        "equipment_status": "retired"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/equipment", payload))
        .await
        .unwrap();
    let created = response_json(response).await;
    let id = created["equipment_id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/equipment/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get_request("/api/equipment")).await.unwrap();
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/equipment/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lookup_routes_serve_reference_data() {
    let app = test_app();
    for uri in [
        "/api/manufacturers",
        "/api/equipment-types",
        "/api/buildings",
        "/api/departments",
        "/api/rooms",
        "/api/funding-sources",
    ] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        let body = response_json(response).await;
        assert!(body.as_array().is_some_and(|rows| !rows.is_empty()), "GET {}", uri);
    }
}

#[tokio::test]
async fn translate_without_endpoint_is_bad_gateway() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/translate",
            json!({ "query": "active CT scanners" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response).await;
    assert!(body["error"].is_string());
}
