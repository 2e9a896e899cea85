//! Domain models.
//!
//! These are internal domain models, distinct from the request/response
//! models of the HTTP layer.

pub mod message;
