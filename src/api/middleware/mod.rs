//! Request processing middleware.

pub mod metrics;
pub mod tracing;
