//! HTTP request metrics middleware.
//!
//! Records request counts and latency through the `metrics` facade. Which
//! exporter (if any) consumes them is the embedding process's choice; with
//! no recorder installed the macros are no-ops.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Records `http_requests_total` and `http_request_latency_seconds` for
/// every request passing through the router.
///
/// The route label uses the matched route template (e.g. `/api/links/{code}`)
/// rather than the raw path, so label cardinality stays bounded.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let method = req.method().to_string();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    let count_labels = [
        ("method", method.clone()),
        ("route", route.clone()),
        ("status", status),
    ];
    metrics::counter!("http_requests_total", &count_labels).increment(1);

    let latency_labels = [("method", method), ("route", route)];
    metrics::histogram!("http_request_latency_seconds", &latency_labels).record(latency);

    response
}
