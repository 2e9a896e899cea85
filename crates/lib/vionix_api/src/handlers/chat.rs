//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse};
use crate::services::chat;

/// `POST /api/chat` — store the user message, reply, store the reply.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(body) = body?;
    body.validate()?;

    let store = state.store()?;
    let resp = chat::chat_turn(store, body.session_id, &body.message).await?;
    Ok(Json(resp))
}
