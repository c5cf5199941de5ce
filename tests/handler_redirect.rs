mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use shortlink::api::handlers::redirect_handler;

fn make_server(pool: SqlitePool) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state(pool));

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_link(&pool, "redir1", "https://example.com/target").await;

    let server = make_server(pool);
    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert_eq!(response.header("cache-control"), "no-store");
}

#[sqlx::test]
async fn test_redirect_records_click_and_access_time(pool: SqlitePool) {
    common::create_test_link(&pool, "click1", "https://example.com").await;

    let server = make_server(pool.clone());

    server
        .get("/click1")
        .await
        .assert_status(axum::http::StatusCode::FOUND);

    assert_eq!(common::click_count(&pool, "click1").await, 1);
    assert!(common::last_access_at(&pool, "click1").await.is_some());

    // A second visit increments again.
    server.get("/click1").await;
    assert_eq!(common::click_count(&pool, "click1").await, 2);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.get("/missing").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_expired_returns_410_without_click(pool: SqlitePool) {
    common::create_expired_link(&pool, "old001", "https://example.com").await;

    let server = make_server(pool.clone());
    let response = server.get("/old001").await;

    assert_eq!(response.status_code(), 410);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "expired");

    // No click is recorded on an expired access.
    assert_eq!(common::click_count(&pool, "old001").await, 0);
    assert!(common::last_access_at(&pool, "old001").await.is_none());
}

#[sqlx::test]
async fn test_redirect_unparsable_expiry_is_treated_as_expired(pool: SqlitePool) {
    common::create_link_with_expiry(&pool, "bad001", "https://example.com", "not-a-timestamp")
        .await;

    let server = make_server(pool.clone());
    let response = server.get("/bad001").await;

    assert_eq!(response.status_code(), 410);
    assert_eq!(common::click_count(&pool, "bad001").await, 0);
}

#[sqlx::test]
async fn test_redirect_future_expiry_still_redirects(pool: SqlitePool) {
    let expires_at = (chrono::Utc::now() + chrono::Duration::hours(1)).to_rfc3339();
    common::create_link_with_expiry(&pool, "fut001", "https://example.com", &expires_at).await;

    let server = make_server(pool.clone());
    let response = server.get("/fut001").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(common::click_count(&pool, "fut001").await, 1);
}

/// Full lifecycle: create via the API, follow the redirect, then confirm the
/// detail view shows the click.
#[sqlx::test]
async fn test_create_redirect_then_detail_shows_click(pool: SqlitePool) {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api/links", shortlink::api::routes::link_routes())
        .with_state(common::create_test_state(pool));
    let server = TestServer::new(app).unwrap();

    let created = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://example.com" }))
        .await;
    created.assert_status(axum::http::StatusCode::CREATED);
    let created: Value = created.json();
    let code = created["short_code"].as_str().unwrap().to_string();
    assert_eq!(created["click_count"], 0);

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com");

    let detail: Value = server.get(&format!("/api/links/{code}")).await.json();
    assert_eq!(detail["click_count"], 1);
    assert!(!detail["last_access_at"].is_null());

    // After deletion both the detail view and the redirect report 404.
    server
        .delete(&format!("/api/links/{code}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/links/{code}"))
        .await
        .assert_status_not_found();
    server
        .get(&format!("/{code}"))
        .await
        .assert_status_not_found();
}
