//! Chat service — one conversational turn and history lookup.

use tracing::{debug, info};
use vionix_core::messages;
use vionix_core::models::message::Message;
use vionix_core::reply;
use vionix_core::store::DocumentStore;
use vionix_core::uuid::new_session_id;

use crate::error::AppResult;
use crate::models::{ChatResponse, MessagesResponse};

/// Run one chat turn.
///
/// The user message and the reply are written one after the other; a
/// failure on the second write leaves the first in place.
pub async fn chat_turn(
    store: &dyn DocumentStore,
    session_id: Option<String>,
    message: &str,
) -> AppResult<ChatResponse> {
    let session_id = session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(new_session_id);

    messages::save_message(store, &Message::user(&session_id, message)).await?;

    let kind = reply::classify(message);
    let reply = reply::reply_for(kind, message);
    debug!(%session_id, ?kind, "generated reply");

    messages::save_message(store, &Message::assistant(&session_id, &reply)).await?;

    info!(%session_id, "chat turn stored");
    Ok(ChatResponse { session_id, reply })
}

/// Stored messages for a session.
pub async fn history(
    store: &dyn DocumentStore,
    session_id: String,
    limit: i64,
) -> AppResult<MessagesResponse> {
    let messages = messages::list_messages(store, &session_id, limit).await?;
    debug!(%session_id, count = messages.len(), limit, "listed messages");
    Ok(MessagesResponse {
        session_id,
        messages,
    })
}
