//! Destination URL validation.

use crate::error::AppError;
use serde_json::json;

/// Checks that a destination URL is non-empty and carries a supported scheme.
///
/// Only `http://` and `https://` destinations are accepted; anything else
/// (including other valid URL schemes such as `ftp://`) is rejected.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the URL is empty or the scheme is
/// not recognized.
pub fn validate_target_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() || !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::bad_request(
            "target_url must start with http:// or https://",
            json!({ "target_url": url }),
        ));
    }

    Ok(())
}
