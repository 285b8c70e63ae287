//! Domain types and pure logic for the medialog tracker.
//!
//! This crate has no I/O: it defines the error taxonomy, the media
//! enumerations, input validation, stats assembly, and the rule-based
//! recommendation table. The `db` and `api` crates build on it.

pub mod auth;
pub mod error;
pub mod media;
pub mod recommendations;
pub mod search;
pub mod stats;
pub mod types;
pub mod validation;
