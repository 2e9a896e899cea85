//! Services orchestrating core operations for the API layer.

pub mod chat;
pub mod diagnostics;
