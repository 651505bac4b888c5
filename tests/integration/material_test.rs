//! Material partitions and lifecycle moves over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use warehouse_entity::material::MaterialPartition;

use crate::helpers::TestApp;

fn bolt() -> serde_json::Value {
    json!({
        "name": "Bolt M8",
        "company_id": 7,
        "unit": "pcs",
        "total_quantity": 250,
        "price_without_vat": 0.12
    })
}

#[tokio::test]
async fn test_planning_to_purchased_scenario() {
    let app = TestApp::new().await;
    let planning_id = app.plan_material(bolt()).await;

    let moved = app
        .request(
            "POST",
            &format!("/api/materials/planning/{planning_id}/purchase"),
            None,
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK, "{}", moved.body);
    let purchased_id = moved.body["data"]["purchased_id"].as_i64().unwrap();
    let item_id = moved.body["data"]["item_id"].as_i64().unwrap();
    assert!(purchased_id > 0);
    assert!(item_id > 0);

    let purchased = app
        .request("GET", &format!("/api/materials/purchased/{purchased_id}"), None)
        .await;
    assert_eq!(purchased.status, StatusCode::OK);
    assert_eq!(purchased.body["data"]["name"], "Bolt M8");
    assert_eq!(purchased.body["data"]["item_id"], item_id);

    let gone = app
        .request("GET", &format!("/api/materials/planning/{planning_id}"), None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_purchased_to_archive_scenario() {
    let app = TestApp::new().await;
    let planning_id = app.plan_material(bolt()).await;
    let moved = app
        .request(
            "POST",
            &format!("/api/materials/planning/{planning_id}/purchase"),
            None,
        )
        .await;
    let purchased_id = moved.body["data"]["purchased_id"].as_i64().unwrap();
    let item_id = moved.body["data"]["item_id"].as_i64().unwrap();

    let archived = app
        .request(
            "POST",
            &format!("/api/materials/purchased/{purchased_id}/archive"),
            None,
        )
        .await;
    assert_eq!(archived.status, StatusCode::OK, "{}", archived.body);

    let history = app
        .request(
            "GET",
            "/api/materials/archive/purchased?limit=10&offset=0&company_id=7",
            None,
        )
        .await;
    assert_eq!(history.status, StatusCode::OK);
    let rows = history.body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["item_id"], item_id);

    let archive_id = rows[0]["id"].as_i64().unwrap();
    let by_id = app
        .request(
            "GET",
            &format!("/api/materials/archive/purchased/{archive_id}"),
            None,
        )
        .await;
    assert_eq!(by_id.body["data"]["item_id"], item_id);
    assert_eq!(by_id.body["data"]["name"], "Bolt M8");

    let gone = app
        .request("GET", &format!("/api/materials/purchased/{purchased_id}"), None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_purchase_is_not_found() {
    let app = TestApp::new().await;
    let planning_id = app.plan_material(bolt()).await;
    let path = format!("/api/materials/planning/{planning_id}/purchase");

    assert_eq!(app.request("POST", &path, None).await.status, StatusCode::OK);
    let again = app.request("POST", &path, None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failed_move_leaves_planning_row_in_place() {
    let app = TestApp::new().await;
    let planning_id = app.plan_material(bolt()).await;
    app.gateway
        .fail_inserts_into(MaterialPartition::PlanningArchive);

    let failed = app
        .request(
            "POST",
            &format!("/api/materials/planning/{planning_id}/purchase"),
            None,
        )
        .await;
    assert_eq!(failed.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(failed.body["error"], "INTERNAL_ERROR");

    let still_planned = app
        .request("GET", &format!("/api/materials/planning/{planning_id}"), None)
        .await;
    assert_eq!(still_planned.status, StatusCode::OK);
    assert_eq!(app.gateway.count(MaterialPartition::Purchased).await, 0);
}

#[tokio::test]
async fn test_extension_fields_round_trip() {
    let app = TestApp::new().await;
    let mut body = bolt();
    body["other_fields"] = json!({"color": "red", "qty_check": 3});
    let planning_id = app.plan_material(body).await;

    let read = app
        .request("GET", &format!("/api/materials/planning/{planning_id}"), None)
        .await;
    assert_eq!(
        read.body["data"]["other_fields"],
        json!({"color": "red", "qty_check": 3})
    );
}

#[tokio::test]
async fn test_create_purchased_returns_item_id() {
    let app = TestApp::new().await;
    let response = app
        .request("POST", "/api/materials/purchased", Some(bolt()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["id"].as_i64().unwrap() > 0);
    assert!(response.body["data"]["item_id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_update_and_delete_planning() {
    let app = TestApp::new().await;
    let planning_id = app.plan_material(bolt()).await;
    let path = format!("/api/materials/planning/{planning_id}");

    let mut changed = bolt();
    changed["total_quantity"] = json!(400);
    let updated = app.request("PUT", &path, Some(changed)).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        app.request("GET", &path, None).await.body["data"]["total_quantity"],
        400
    );

    assert_eq!(app.request("DELETE", &path, None).await.status, StatusCode::OK);
    assert_eq!(
        app.request("DELETE", &path, None).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_search_tags_partitions() {
    let app = TestApp::new().await;
    app.plan_material(bolt()).await;
    let mut other = bolt();
    other["name"] = json!("Bolt M6");
    app.request("POST", "/api/materials/purchased", Some(other))
        .await;
    let mut nut = bolt();
    nut["name"] = json!("Nut M8");
    app.plan_material(nut).await;

    let response = app
        .request(
            "GET",
            "/api/materials/search?query=bolt&limit=10&offset=0&company_id=7",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let hits = response.body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["name"], "Bolt M6");
    assert_eq!(hits[0]["partition"], "purchased");
    assert_eq!(hits[1]["partition"], "planning");
}

#[tokio::test]
async fn test_archive_partitions_are_listed_per_tenant() {
    let app = TestApp::new().await;
    let planning_id = app.plan_material(bolt()).await;
    app.request(
        "POST",
        &format!("/api/materials/planning/{planning_id}/purchase"),
        None,
    )
    .await;

    let own = app
        .request(
            "GET",
            "/api/materials/archive/planning?limit=10&offset=0&company_id=7",
            None,
        )
        .await;
    assert_eq!(own.body["data"].as_array().unwrap().len(), 1);

    let foreign = app
        .request(
            "GET",
            "/api/materials/archive/planning?limit=10&offset=0&company_id=8",
            None,
        )
        .await;
    assert!(foreign.body["data"].as_array().unwrap().is_empty());
}
