//! # Shortlink
//!
//! A small and fast URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered landing page
//!
//! ## Features
//!
//! - Collision-checked random short codes from a 62-character alphabet
//! - Expiry-aware redirects with atomic click counting
//! - Partial updates that distinguish "leave unchanged" from "clear"
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; the database file is created next to the binary by default
//! export DATABASE_URL="sqlite://shortlink.db"
//! export BASE_URL="https://sho.rt"
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, LinkRecord, LinkUpdate, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
