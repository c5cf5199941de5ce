//! Core business data structures.

pub mod link;

pub use link::{Link, LinkPatch, LinkRecord, LinkUpdate, NewLink, parse_stored_timestamp};
