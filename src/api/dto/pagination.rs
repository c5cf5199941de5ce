//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Limit/offset query parameters for list endpoints.
///
/// Uses `serde_with` to parse values from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u32>,
}

impl ListParams {
    /// Validates pagination parameters and converts to SQL limit/offset.
    ///
    /// # Defaults
    ///
    /// - `limit`: 100
    /// - `offset`: 0
    ///
    /// # Validation
    ///
    /// Limit must be between 1 and 1000.
    pub fn validate_and_get_limit_offset(&self) -> Result<(i64, i64), String> {
        let limit = self.limit.unwrap_or(100);
        let offset = self.offset.unwrap_or(0);

        if !(1..=1000).contains(&limit) {
            return Err("Limit must be between 1 and 1000".to_string());
        }

        Ok((limit as i64, offset as i64))
    }
}
