//! Process-local document store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DocumentStore, Result};
use crate::uuid::uuidv7;

const DATABASE_NAME: &str = "memory";

/// Keeps documents in memory, in insertion order per collection.
///
/// Nothing survives a restart. Used by tests and by the server's
/// development mode.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<(Uuid, Value)>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Top-level field equality, the same subset of `@>` the service relies on.
fn matches(document: &Value, filter: &Value) -> bool {
    let Some(filter) = filter.as_object() else {
        return false;
    };
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<Uuid> {
        let id = uuidv7();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push((id, document));
        Ok(id)
    }

    async fn find(&self, collection: &str, filter: &Value, limit: i64) -> Result<Vec<Value>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let collections = self.collections.read().await;
        let docs = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(_, doc)| doc)
                    .filter(|doc| matches(doc, filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn collection_names(&self) -> Result<Vec<String>> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    async fn database_name(&self) -> Result<String> {
        Ok(DATABASE_NAME.to_string())
    }
}
