//! Shared application state injected into HTTP handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Application state shared across all request handlers.
///
/// Constructed once at startup; handlers receive clones (all fields are
/// reference-counted). There is no other cross-request state; the database
/// is the only shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqlitePool>,
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
}

impl AppState {
    /// Wires the repository and service around a connection pool.
    pub fn new(db: Arc<SqlitePool>, base_url: String) -> Self {
        let repository = Arc::new(SqliteLinkRepository::new(db.clone()));
        let link_service = Arc::new(LinkService::new(repository, base_url));

        Self { db, link_service }
    }
}
