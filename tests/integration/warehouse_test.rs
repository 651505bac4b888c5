//! Warehouse and supplier routes over the read-through cache.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn create(app: &TestApp, path: &str, body: serde_json::Value) -> i64 {
    let response = app.request("POST", path, Some(body)).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response.body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_second_read_is_served_from_cache() {
    let app = TestApp::new().await;
    let id = create(
        &app,
        "/api/warehouses",
        json!({"name": "Main", "company_id": 7, "max_capacity": 1000}),
    )
    .await;
    let path = format!("/api/warehouses/{id}");

    let first = app.request("GET", &path, None).await;
    let second = app.request("GET", &path, None).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"]["name"], "Main");
    assert_eq!(second.body, first.body);
    assert_eq!(app.warehouses.find_calls(), 1);
}

#[tokio::test]
async fn test_cached_warehouse_survives_update() {
    let app = TestApp::new().await;
    let id = create(
        &app,
        "/api/warehouses",
        json!({"name": "Main", "company_id": 7}),
    )
    .await;
    let path = format!("/api/warehouses/{id}");
    app.request("GET", &path, None).await;

    let updated = app
        .request(
            "PUT",
            &path,
            Some(json!({"name": "Renamed", "company_id": 7})),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let cached = app.request("GET", &path, None).await;
    assert_eq!(cached.body["data"]["name"], "Main");
    assert_eq!(app.warehouses.find_calls(), 1);
}

#[tokio::test]
async fn test_update_from_another_company_is_not_found() {
    let app = TestApp::new().await;
    let id = create(
        &app,
        "/api/warehouses",
        json!({"name": "Main", "company_id": 7}),
    )
    .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/warehouses/{id}"),
            Some(json!({"name": "Stolen", "company_id": 8})),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let app = TestApp::new().await;
    app.warehouses.fail_reads(true);

    let response = app.request("GET", "/api/warehouses/5", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_missing_supplier_is_not_found() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/suppliers/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(app.suppliers.find_calls(), 1);
}

#[tokio::test]
async fn test_supplier_read_through() {
    let app = TestApp::new().await;
    let id = create(
        &app,
        "/api/suppliers",
        json!({"name": "Acme", "company_id": 7, "other_fields": {"rating": 5}}),
    )
    .await;
    let path = format!("/api/suppliers/{id}");

    app.request("GET", &path, None).await;
    let cached = app.request("GET", &path, None).await;

    assert_eq!(cached.body["data"]["name"], "Acme");
    assert_eq!(cached.body["data"]["other_fields"]["rating"], 5);
    assert_eq!(app.suppliers.find_calls(), 1);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let app = TestApp::new().await;
    let id = create(
        &app,
        "/api/suppliers",
        json!({"name": "Acme", "company_id": 7}),
    )
    .await;
    let path = format!("/api/suppliers/{id}");

    assert_eq!(app.request("DELETE", &path, None).await.status, StatusCode::OK);
    assert_eq!(
        app.request("DELETE", &path, None).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_list_by_company() {
    let app = TestApp::new().await;
    create(&app, "/api/warehouses", json!({"name": "A", "company_id": 7})).await;
    create(&app, "/api/warehouses", json!({"name": "B", "company_id": 7})).await;
    create(&app, "/api/warehouses", json!({"name": "C", "company_id": 8})).await;

    let response = app
        .request("GET", "/api/warehouses?company_id=7", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<_> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}
