//! Request validation happens before any storage call.

use axum::http::StatusCode;
use serde_json::json;

use warehouse_core::traits::Repository;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_zero_limit_is_rejected_before_storage() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "GET",
            "/api/materials/planning?limit=0&offset=0&company_id=7",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(app.gateway.calls(), 0);
}

#[tokio::test]
async fn test_negative_offset_is_rejected_before_storage() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "GET",
            "/api/materials/purchased?limit=10&offset=-1&company_id=7",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.gateway.calls(), 0);
}

#[tokio::test]
async fn test_missing_list_params_are_rejected() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/materials/planning", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.gateway.calls(), 0);
}

#[tokio::test]
async fn test_zero_company_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "GET",
            "/api/materials/archive/planning?limit=10&offset=0&company_id=0",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.gateway.calls(), 0);
}

#[tokio::test]
async fn test_non_numeric_params_are_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "GET",
            "/api/materials/planning?limit=ten&offset=0&company_id=7",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_zero_path_id_is_rejected() {
    let app = TestApp::new().await;

    let material = app.request("GET", "/api/materials/planning/0", None).await;
    assert_eq!(material.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.gateway.calls(), 0);

    let warehouse = app.request("GET", "/api/warehouses/0", None).await;
    assert_eq!(warehouse.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.warehouses.find_calls(), 0);

    let moved = app
        .request("POST", "/api/materials/planning/0/purchase", None)
        .await;
    assert_eq!(moved.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_path_id_is_rejected() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/suppliers/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.suppliers.find_calls(), 0);
}

#[tokio::test]
async fn test_category_listing_validates_before_database() {
    let app = TestApp::new().await;
    let response = app
        .request("GET", "/api/categories?limit=0&offset=0&company_id=7", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_responsible_users_require_company() {
    let app = TestApp::new().await;
    let response = app
        .request("GET", "/api/warehouses/responsible-users?company_id=0", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_without_company_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request("POST", "/api/warehouses", Some(json!({"name": "Main"})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        app.warehouses
            .list_by_company(0)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_material_without_company_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/materials/planning",
            Some(json!({"name": "Bolt M8"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.gateway.calls(), 0);
}

#[tokio::test]
async fn test_empty_search_query_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "GET",
            "/api/materials/search?query=&limit=10&offset=0&company_id=7",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.gateway.calls(), 0);
}
