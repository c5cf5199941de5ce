//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Behavior
///
/// Resolution is expiry-checked and click-counted: on success the click
/// counter and `last_access_at` advance atomically before the redirect is
/// issued. The response is `302 Found` with `Cache-Control: no-store` so
/// clients re-resolve on every visit and expiry takes effect immediately.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link is past its expiry (no click is recorded).
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.link_service.resolve(&code).await?;

    debug!(code, target_url = %record.target_url, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, record.target_url),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
    ))
}
