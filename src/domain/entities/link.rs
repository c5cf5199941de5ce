//! Link entity representing a short code to destination URL mapping.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// A link row as stored.
///
/// Timestamps are kept as the stored ISO-8601 text. Parsing happens at the
/// service boundary when rows are shaped into [`LinkRecord`]s, so a stored
/// value the service cannot parse degrades per field instead of failing the
/// whole read.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub target_url: String,
    pub created_at: String,
    pub expires_at: Option<String>,
    pub click_count: i64,
    pub last_access_at: Option<String>,
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Tri-state update request for an existing link.
///
/// Each field distinguishes three intents:
///
/// - `None` — leave the field untouched
/// - `Some(None)` — clear the field (set to null)
/// - `Some(Some(v))` — set the field to `v`
#[derive(Debug, Clone, Default)]
pub struct LinkUpdate {
    pub target_url: Option<Option<String>>,
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

impl LinkUpdate {
    /// Returns `true` if no field is marked for change.
    pub fn is_noop(&self) -> bool {
        self.target_url.is_none() && self.expires_at.is_none()
    }
}

/// Store-facing partial update. `None` fields are left unchanged.
///
/// `expires_at: Some(None)` clears the expiry; `Some(Some(t))` sets it.
/// `target_url` carries no clear state; a link always has a destination.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub target_url: Option<String>,
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

impl LinkPatch {
    /// Returns `true` if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.target_url.is_none() && self.expires_at.is_none()
    }
}

/// Public representation of a link, returned across the API contract.
///
/// The internal row id never appears here; `short_code` is the external
/// identifier and `short_url` is derived from the configured base URL.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinkRecord {
    pub short_code: String,
    pub target_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
    pub last_access_at: Option<DateTime<Utc>>,
}

/// Parses a stored ISO-8601 timestamp.
///
/// Accepts RFC 3339 (the format this service writes) and offset-less
/// `YYYY-MM-DDTHH:MM:SS[.f]` text, which is treated as UTC. Returns `None`
/// for anything else.
pub fn parse_stored_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
