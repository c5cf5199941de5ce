//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeExists;

/// Columns selected for every link read, in [`LinkRow`] field order.
const LINK_COLUMNS: &str =
    "id, short_code, target_url, created_at, expires_at, click_count, last_access_at";

/// Raw row as stored; timestamps stay ISO-8601 text (see
/// [`crate::domain::entities::Link`]).
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    target_url: String,
    created_at: String,
    expires_at: Option<String>,
    click_count: i64,
    last_access_at: Option<String>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            short_code: row.short_code,
            target_url: row.target_url,
            created_at: row.created_at,
            expires_at: row.expires_at,
            click_count: row.click_count,
            last_access_at: row.last_access_at,
        }
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Every mutation is a single statement; SQLite serializes conflicting
/// writes to the same row, so `update_fields` and
/// `increment_click_and_touch` are atomic per call without service-level
/// locking.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            "INSERT INTO links (short_code, target_url, created_at, expires_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING {LINK_COLUMNS}"
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(&new_link.short_code)
            .bind(&new_link.target_url)
            .bind(new_link.created_at.to_rfc3339())
            .bind(new_link.expires_at.map(|t| t.to_rfc3339()))
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE short_code = ?");

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Link>, AppError> {
        let sql = format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY id DESC LIMIT ? OFFSET ?"
        );

        let rows = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_fields(&self, code: &str, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        if patch.is_empty() {
            return self.find_by_code(code).await;
        }

        let mut assignments = Vec::new();
        if patch.target_url.is_some() {
            assignments.push("target_url = ?");
        }
        if patch.expires_at.is_some() {
            assignments.push("expires_at = ?");
        }

        let sql = format!(
            "UPDATE links SET {} WHERE short_code = ? RETURNING {LINK_COLUMNS}",
            assignments.join(", ")
        );

        let mut query = sqlx::query_as::<_, LinkRow>(&sql);
        if let Some(target_url) = &patch.target_url {
            query = query.bind(target_url);
        }
        if let Some(expires_at) = &patch.expires_at {
            query = query.bind(expires_at.map(|t| t.to_rfc3339()));
        }

        let row = query
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE short_code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_click_and_touch(
        &self,
        code: &str,
        access_time: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError> {
        let sql = format!(
            "UPDATE links SET click_count = click_count + 1, last_access_at = ? \
             WHERE short_code = ? \
             RETURNING {LINK_COLUMNS}"
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(access_time.to_rfc3339())
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl CodeExists for SqliteLinkRepository {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE short_code = ?)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }
}
