//! Document store.
//!
//! Records are JSON objects grouped into named collections. The
//! [`DocumentStore`] trait is the seam between the service and its backing
//! storage; [`PgDocumentStore`] persists to PostgreSQL and
//! [`MemoryDocumentStore`] keeps everything in process.

mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for document store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Backing storage for JSON documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into a collection, returning its id.
    async fn insert(&self, collection: &str, document: Value) -> Result<Uuid>;

    /// Documents in `collection` whose top-level fields equal every field of
    /// `filter`, oldest first, at most `limit` of them.
    async fn find(&self, collection: &str, filter: &Value, limit: i64) -> Result<Vec<Value>>;

    /// Names of the collections holding at least one document.
    async fn collection_names(&self) -> Result<Vec<String>>;

    /// Name of the underlying database.
    async fn database_name(&self) -> Result<String>;
}

/// Insert a record into `collection`, stamping `created_at` and `updated_at`.
pub async fn create_document<T: Serialize + ?Sized>(
    store: &dyn DocumentStore,
    collection: &str,
    record: &T,
) -> Result<Uuid> {
    let Value::Object(mut fields) = serde_json::to_value(record)? else {
        return Err(StoreError::InvalidDocument(format!(
            "records in '{collection}' must serialize to a JSON object"
        )));
    };

    let now = Value::String(Utc::now().to_rfc3339());
    fields.insert("created_at".into(), now.clone());
    fields.insert("updated_at".into(), now);

    store.insert(collection, Value::Object(fields)).await
}

/// Fetch raw documents from `collection` matching `filter`.
pub async fn get_documents(
    store: &dyn DocumentStore,
    collection: &str,
    filter: Value,
    limit: i64,
) -> Result<Vec<Value>> {
    if !filter.is_object() {
        return Err(StoreError::InvalidDocument(
            "filter must be a JSON object".into(),
        ));
    }
    if limit < 0 {
        return Err(StoreError::InvalidDocument(format!(
            "limit must not be negative, got {limit}"
        )));
    }

    store.find(collection, &filter, limit).await
}
