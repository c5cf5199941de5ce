#![allow(dead_code)]

use chrono::{Duration, Utc};
use shortlink::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), BASE_URL.to_string())
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (short_code, target_url, created_at) VALUES (?, ?, ?)")
        .bind(code)
        .bind(url)
        .bind(Utc::now().to_rfc3339())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, url: &str) {
    let expires_at = (Utc::now() - Duration::hours(1)).to_rfc3339();
    create_link_with_expiry(pool, code, url, &expires_at).await;
}

/// Inserts a link with the given raw `expires_at` text, which deliberately
/// may be unparsable.
pub async fn create_link_with_expiry(pool: &SqlitePool, code: &str, url: &str, expires_at: &str) {
    sqlx::query(
        "INSERT INTO links (short_code, target_url, created_at, expires_at) VALUES (?, ?, ?, ?)",
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now().to_rfc3339())
    .bind(expires_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn last_access_at(pool: &SqlitePool, code: &str) -> Option<String> {
    sqlx::query_scalar("SELECT last_access_at FROM links WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
