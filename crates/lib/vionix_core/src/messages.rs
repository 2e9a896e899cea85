//! Conversation history on top of the document store.

use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use tracing::debug;
use uuid::Uuid;

use crate::models::message::{Message, Role};
use crate::store::{self, DocumentStore, Result};

/// Collection that holds chat messages.
pub const MESSAGE_COLLECTION: &str = "message";

/// Stored shape of a message. Missing fields take defaults; explicit nulls,
/// fields of the wrong type or an unknown role make the record undecodable.
#[derive(Debug, Deserialize)]
struct StoredMessage {
    #[serde(default, deserialize_with = "present")]
    session_id: Option<String>,
    #[serde(default, deserialize_with = "present")]
    role: Option<Role>,
    #[serde(default, deserialize_with = "present")]
    content: Option<String>,
}

/// A field that is present must hold a value; `null` is an error.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl StoredMessage {
    fn into_message(self, session_id: &str) -> Message {
        Message {
            session_id: self.session_id.unwrap_or_else(|| session_id.to_string()),
            role: self.role.unwrap_or(Role::User),
            content: self.content.unwrap_or_default(),
        }
    }
}

/// Persist one message.
pub async fn save_message(store: &dyn DocumentStore, message: &Message) -> Result<Uuid> {
    let id = store::create_document(store, MESSAGE_COLLECTION, message).await?;
    debug!(%id, session_id = %message.session_id, role = %message.role, "saved message");
    Ok(id)
}

/// Messages for a session in store order, at most `limit`.
///
/// Records that cannot be decoded are skipped.
pub async fn list_messages(
    store: &dyn DocumentStore,
    session_id: &str,
    limit: i64,
) -> Result<Vec<Message>> {
    let docs = store::get_documents(
        store,
        MESSAGE_COLLECTION,
        json!({ "session_id": session_id }),
        limit,
    )
    .await?;

    Ok(docs
        .into_iter()
        .filter_map(|doc| decode_message(doc, session_id))
        .collect())
}

fn decode_message(doc: Value, session_id: &str) -> Option<Message> {
    match serde_json::from_value::<StoredMessage>(doc) {
        Ok(stored) => Some(stored.into_message(session_id)),
        Err(e) => {
            debug!(session_id, error = %e, "skipping malformed message record");
            None
        }
    }
}
