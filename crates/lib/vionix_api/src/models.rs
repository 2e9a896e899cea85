//! Request and response bodies.

use serde::{Deserialize, Serialize};
use vionix_core::models::message::Message;

use crate::error::{AppError, AppResult};

/// Default number of messages returned by `GET /api/messages`.
pub const DEFAULT_MESSAGE_LIMIT: i64 = 50;

/// Largest accepted `limit` for `GET /api/messages`.
pub const MAX_MESSAGE_LIMIT: i64 = 200;

/// Rejects text the document store cannot hold (NUL characters).
fn check_storable(field: &str, value: &str) -> AppResult<()> {
    if value.contains('\0') {
        return Err(AppError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `GET /` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub name: String,
    pub status: String,
    pub message: String,
}

/// `GET /api/hello` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

/// `POST /api/chat` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation session id. A new one is created when absent or empty.
    #[serde(default)]
    pub session_id: Option<String>,
    /// The user's message. Must not be empty.
    pub message: String,
}

impl ChatRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.message.is_empty() {
            return Err(AppError::Validation("message must not be empty".into()));
        }
        check_storable("message", &self.message)?;
        if let Some(session_id) = &self.session_id {
            check_storable("session_id", session_id)?;
        }
        Ok(())
    }
}

/// `POST /api/chat` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
}

/// `GET /api/messages` query string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesQuery {
    pub session_id: String,
    #[serde(default = "default_message_limit")]
    pub limit: i64,
}

fn default_message_limit() -> i64 {
    DEFAULT_MESSAGE_LIMIT
}

impl MessagesQuery {
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_MESSAGE_LIMIT).contains(&self.limit) {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {MAX_MESSAGE_LIMIT}, got {}",
                self.limit
            )));
        }
        check_storable("session_id", &self.session_id)
    }
}

/// `GET /api/messages` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub session_id: String,
    pub messages: Vec<Message>,
}

/// `GET /test` body: store connectivity and configuration presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
