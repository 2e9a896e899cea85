//! # vionix_core
//!
//! Core domain logic for Vionix: the message model, the reply rules, and the
//! document store that persists conversation history.

pub mod hello;
pub mod messages;
pub mod migrate;
pub mod models;
pub mod reply;
pub mod store;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
