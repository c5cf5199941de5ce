//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Destination URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub target_url: String,

    /// Optional expiry timestamp. After this time, redirects return 410 Gone.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Request body for `PUT /api/links/{code}`.
///
/// Both fields are tri-state — absence is distinct from an explicit null:
///
/// - **Absent** (not in JSON) → leave the existing value unchanged
/// - **`null`** → clear the field (`expires_at` only; a null `target_url`
///   is rejected, a link always has a destination)
/// - **Value** → set the field
#[derive(Debug, Deserialize)]
pub struct UpdateLinkRequest {
    /// New destination URL. Absent = no change, null = rejected, value = set.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub target_url: Option<Option<String>>,

    /// Expiry timestamp. Absent = no change, null = clear, value = set.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub expires_at: Option<Option<DateTime<Utc>>>,
}
