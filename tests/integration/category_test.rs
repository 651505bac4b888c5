//! Category routes and the responsible-users lookup.

use axum::http::StatusCode;
use serde_json::json;

use warehouse_entity::user::{Section, User};

use crate::helpers::TestApp;

async fn create_category(app: &TestApp, name: &str, company_id: i64) -> i64 {
    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(json!({"name": name, "company_id": company_id})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response.body["data"]["id"].as_i64().unwrap()
}

fn names(body: &serde_json::Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_category_hidden_from_other_company() {
    let app = TestApp::new().await;
    let id = create_category(&app, "Fasteners", 7).await;

    let foreign = app
        .request("GET", &format!("/api/categories/{id}?company_id=8"), None)
        .await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
    assert_eq!(
        foreign.body,
        json!({"error": "NOT_FOUND", "message": format!("category {id} not found")})
    );

    let own = app
        .request("GET", &format!("/api/categories/{id}?company_id=7"), None)
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["data"]["name"], "Fasteners");
}

#[tokio::test]
async fn test_category_delete_from_other_company_keeps_row() {
    let app = TestApp::new().await;
    let id = create_category(&app, "Fasteners", 7).await;

    let foreign = app
        .request("DELETE", &format!("/api/categories/{id}?company_id=8"), None)
        .await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);

    let still_there = app
        .request("GET", &format!("/api/categories/{id}?company_id=7"), None)
        .await;
    assert_eq!(still_there.status, StatusCode::OK);

    let own = app
        .request("DELETE", &format!("/api/categories/{id}?company_id=7"), None)
        .await;
    assert_eq!(own.status, StatusCode::OK);
    let gone = app
        .request("GET", &format!("/api/categories/{id}?company_id=7"), None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_update_from_other_company_is_not_found() {
    let app = TestApp::new().await;
    let id = create_category(&app, "Fasteners", 7).await;
    let path = format!("/api/categories/{id}");

    let foreign = app
        .request("PUT", &path, Some(json!({"name": "Taken", "company_id": 8})))
        .await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);

    let own = app
        .request("PUT", &path, Some(json!({"name": "Fixings", "company_id": 7})))
        .await;
    assert_eq!(own.status, StatusCode::OK);

    let fetched = app
        .request("GET", &format!("{path}?company_id=7"), None)
        .await;
    assert_eq!(fetched.body["data"]["name"], "Fixings");
}

#[tokio::test]
async fn test_category_search_is_ordered_prefix_match() {
    let app = TestApp::new().await;
    for name in ["Pipes steel", "pipes copper", "Pumps", "Hose pipes"] {
        create_category(&app, name, 7).await;
    }
    create_category(&app, "Pipes elsewhere", 8).await;

    let response = app
        .request(
            "GET",
            "/api/categories/search?query=pipes&limit=10&offset=0&company_id=7",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body), vec!["pipes copper", "Pipes steel"]);
}

#[tokio::test]
async fn test_category_search_wildcards_are_literal() {
    let app = TestApp::new().await;
    for name in ["50% off", "500 Series", "5_x", "5ax"] {
        create_category(&app, name, 7).await;
    }

    let percent = app
        .request(
            "GET",
            "/api/categories/search?query=50%25&limit=10&offset=0&company_id=7",
            None,
        )
        .await;
    assert_eq!(names(&percent.body), vec!["50% off"]);

    let underscore = app
        .request(
            "GET",
            "/api/categories/search?query=5_&limit=10&offset=0&company_id=7",
            None,
        )
        .await;
    assert_eq!(names(&underscore.body), vec!["5_x"]);
}

#[tokio::test]
async fn test_category_list_pages_per_company() {
    let app = TestApp::new().await;
    for name in ["A", "B", "C"] {
        create_category(&app, name, 7).await;
    }
    create_category(&app, "Other", 8).await;

    let page = app
        .request("GET", "/api/categories?limit=2&offset=1&company_id=7", None)
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(names(&page.body), vec!["B", "C"]);
}

fn user(id: i64, company_id: i64, sections: &[&str]) -> User {
    User {
        id,
        company_id,
        username: format!("user{id}"),
        sections: sections.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_responsible_users_match_purchase_sections() {
    let app = TestApp::new().await;
    app.users.insert(user(1, 7, &[Section::FULL_COMPANY_ACCESS]));
    app.users.insert(user(2, 7, &[Section::FULL_ACCESS]));
    app.users.insert(user(
        3,
        7,
        &[Section::ORDER_CARD_ACCESS, Section::PURCHASE_PLANNING_ACCESS],
    ));
    app.users.insert(user(4, 7, &[Section::FULL_ALL_ACCESS]));
    app.users.insert(user(5, 7, &[Section::ORDER_CARD_ACCESS]));
    app.users.insert(user(6, 8, &[Section::FULL_ACCESS]));

    let response = app
        .request("GET", "/api/warehouses/responsible-users?company_id=7", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let ids: Vec<_> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
