//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, UpdateLinkRequest};
use crate::api::dto::pagination::ListParams;
use crate::domain::entities::{LinkRecord, LinkUpdate};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "target_url": "https://example.com",
///   "expires_at": "2026-12-31T23:59:59Z"  // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkRecord>), AppError> {
    payload.validate()?;

    let record = state
        .link_service
        .create(payload.target_url, payload.expires_at)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Lists links newest-first.
///
/// # Endpoint
///
/// `GET /api/links?limit=100&offset=0`
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are out of range.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<LinkRecord>>, AppError> {
    let (limit, offset) = params
        .validate_and_get_limit_offset()
        .map_err(|message| AppError::bad_request(message, json!({})))?;

    let records = state.link_service.list(limit, offset).await?;

    Ok(Json(records))
}

/// Returns the details of a single link.
///
/// Expired links are returned as data; the detail view reports on a link,
/// it does not resolve it.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkRecord>, AppError> {
    let record = state.link_service.get(&code).await?;

    Ok(Json(record))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PUT /api/links/{code}`
///
/// # Request Body
///
/// Both fields are optional — only provided fields are changed.
///
/// ```json
/// {
///   "target_url": "https://new-destination.com",
///   "expires_at": "2026-12-31T23:59:59Z"  // null to clear
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
/// Returns 400 Bad Request if a supplied `target_url` is invalid or null.
pub async fn update_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkRecord>, AppError> {
    let update = LinkUpdate {
        target_url: payload.target_url,
        expires_at: payload.expires_at,
    };

    let record = state.link_service.update(&code, update).await?;

    Ok(Json(record))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
