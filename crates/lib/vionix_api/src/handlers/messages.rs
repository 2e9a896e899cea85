//! Conversation history handler.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::AppState;
use crate::error::AppResult;
use crate::models::{MessagesQuery, MessagesResponse};
use crate::services::chat;

/// `GET /api/messages` — messages stored for a session.
pub async fn list_messages_handler(
    State(state): State<AppState>,
    query: Result<Query<MessagesQuery>, QueryRejection>,
) -> AppResult<Json<MessagesResponse>> {
    let Query(query) = query?;
    query.validate()?;

    let store = state.store()?;
    let resp = chat::history(store, query.session_id, query.limit).await?;
    Ok(Json(resp))
}
