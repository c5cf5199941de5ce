//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the link store.
///
/// A single table keyed by `short_code` (unique). Mutating operations are
/// single atomic statements so concurrent redirects for the same code never
/// lose updates.
///
/// Implementations additionally provide the narrow
/// [`crate::utils::code_generator::CodeExists`] capability used by code
/// generation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks built with `mockall::mock!` where services are unit tested
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `click_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists links newest-first with limit/offset pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Link>, AppError>;

    /// Applies a partial update as one atomic statement.
    ///
    /// Only fields present in [`LinkPatch`] are modified. Returns the
    /// freshly updated row, or `None` if no link matches the code. An empty
    /// patch performs no write and returns the current row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_fields(&self, code: &str, patch: LinkPatch) -> Result<Option<Link>, AppError>;

    /// Deletes a link. Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically increments `click_count` and sets `last_access_at` in the
    /// same statement, returning the post-increment row.
    ///
    /// Returns `None` if no link matches the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_click_and_touch(
        &self,
        code: &str,
        access_time: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError>;
}
