mod common;

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use shortlink::AppError;
use shortlink::domain::entities::{LinkPatch, NewLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::SqliteLinkRepository;
use shortlink::utils::code_generator::CodeExists;

fn repo(pool: SqlitePool) -> SqliteLinkRepository {
    SqliteLinkRepository::new(Arc::new(pool))
}

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        short_code: code.to_string(),
        target_url: url.to_string(),
        created_at: Utc::now(),
        expires_at: None,
    }
}

#[sqlx::test]
async fn test_insert_returns_fresh_row(pool: SqlitePool) {
    let repo = repo(pool);

    let link = repo
        .insert(new_link("ins001", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.short_code, "ins001");
    assert_eq!(link.target_url, "https://example.com");
    assert_eq!(link.click_count, 0);
    assert!(link.expires_at.is_none());
    assert!(link.last_access_at.is_none());
}

#[sqlx::test]
async fn test_insert_duplicate_code_is_conflict(pool: SqlitePool) {
    let repo = repo(pool);

    repo.insert(new_link("dup001", "https://example.com"))
        .await
        .unwrap();
    let result = repo.insert(new_link("dup001", "https://other.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_insert_persists_expiry(pool: SqlitePool) {
    let repo = repo(pool);
    let expires_at = Utc::now() + Duration::hours(1);

    let link = repo
        .insert(NewLink {
            short_code: "exp001".to_string(),
            target_url: "https://example.com".to_string(),
            created_at: Utc::now(),
            expires_at: Some(expires_at),
        })
        .await
        .unwrap();

    assert_eq!(link.expires_at, Some(expires_at.to_rfc3339()));
}

#[sqlx::test]
async fn test_exists(pool: SqlitePool) {
    common::create_test_link(&pool, "exi001", "https://example.com").await;
    let repo = repo(pool);

    assert!(repo.exists("exi001").await.unwrap());
    assert!(!repo.exists("nope").await.unwrap());
}

#[sqlx::test]
async fn test_find_by_code(pool: SqlitePool) {
    common::create_test_link(&pool, "fnd001", "https://example.com").await;
    let repo = repo(pool);

    let found = repo.find_by_code("fnd001").await.unwrap();
    assert_eq!(found.unwrap().short_code, "fnd001");

    let missing = repo.find_by_code("missing").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_list_newest_first_with_pagination(pool: SqlitePool) {
    common::create_test_link(&pool, "lst001", "https://example.com/1").await;
    common::create_test_link(&pool, "lst002", "https://example.com/2").await;
    common::create_test_link(&pool, "lst003", "https://example.com/3").await;
    let repo = repo(pool);

    let all = repo.list(100, 0).await.unwrap();
    let codes: Vec<&str> = all.iter().map(|l| l.short_code.as_str()).collect();
    assert_eq!(codes, vec!["lst003", "lst002", "lst001"]);

    let second_page = repo.list(1, 1).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].short_code, "lst002");
}

#[sqlx::test]
async fn test_update_fields_target_url_only(pool: SqlitePool) {
    common::create_expired_link(&pool, "upd001", "https://old.example.com").await;
    let repo = repo(pool);

    let patch = LinkPatch {
        target_url: Some("https://new.example.com".to_string()),
        expires_at: None,
    };
    let updated = repo.update_fields("upd001", patch).await.unwrap().unwrap();

    assert_eq!(updated.target_url, "https://new.example.com");
    // The untouched expiry survives the partial update.
    assert!(updated.expires_at.is_some());
}

#[sqlx::test]
async fn test_update_fields_clears_expiry(pool: SqlitePool) {
    common::create_expired_link(&pool, "clr001", "https://example.com").await;
    let repo = repo(pool);

    let patch = LinkPatch {
        target_url: None,
        expires_at: Some(None),
    };
    let updated = repo.update_fields("clr001", patch).await.unwrap().unwrap();

    assert!(updated.expires_at.is_none());
}

#[sqlx::test]
async fn test_update_fields_sets_expiry(pool: SqlitePool) {
    common::create_test_link(&pool, "set001", "https://example.com").await;
    let repo = repo(pool);
    let expires_at = Utc::now() + Duration::days(7);

    let patch = LinkPatch {
        target_url: None,
        expires_at: Some(Some(expires_at)),
    };
    let updated = repo.update_fields("set001", patch).await.unwrap().unwrap();

    assert_eq!(updated.expires_at, Some(expires_at.to_rfc3339()));
}

#[sqlx::test]
async fn test_update_fields_empty_patch_returns_current_row(pool: SqlitePool) {
    common::create_test_link(&pool, "emp001", "https://example.com").await;
    let repo = repo(pool);

    let updated = repo
        .update_fields("emp001", LinkPatch::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.target_url, "https://example.com");
}

#[sqlx::test]
async fn test_update_fields_missing_code_is_none(pool: SqlitePool) {
    let repo = repo(pool);

    let patch = LinkPatch {
        target_url: Some("https://example.com".to_string()),
        expires_at: None,
    };
    let updated = repo.update_fields("missing", patch).await.unwrap();

    assert!(updated.is_none());
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    common::create_test_link(&pool, "del001", "https://example.com").await;
    let repo = repo(pool);

    assert!(repo.delete("del001").await.unwrap());
    assert!(!repo.delete("del001").await.unwrap());
    assert!(repo.find_by_code("del001").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_increment_click_and_touch(pool: SqlitePool) {
    common::create_test_link(&pool, "clk001", "https://example.com").await;
    let repo = repo(pool);
    let access_time = Utc::now();

    let first = repo
        .increment_click_and_touch("clk001", access_time)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.click_count, 1);
    assert_eq!(first.last_access_at, Some(access_time.to_rfc3339()));

    let second = repo
        .increment_click_and_touch("clk001", Utc::now())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.click_count, 2);
}

#[sqlx::test]
async fn test_increment_click_missing_code_is_none(pool: SqlitePool) {
    let repo = repo(pool);

    let result = repo
        .increment_click_and_touch("missing", Utc::now())
        .await
        .unwrap();

    assert!(result.is_none());
}
