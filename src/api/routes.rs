//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes, nested under `/api/links`.
///
/// # Endpoints
///
/// - `POST   /`        - Create a short link
/// - `GET    /`        - List links (newest first, limit/offset)
/// - `GET    /{code}`  - Link details
/// - `PUT    /{code}`  - Partially update a link
/// - `DELETE /{code}`  - Delete a link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_link_handler).get(list_links_handler))
        .route(
            "/{code}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
