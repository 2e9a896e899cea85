//! PostgreSQL-backed document store.
//!
//! Documents live in a single `documents` table as JSONB, keyed by a UUIDv7
//! so that `ORDER BY id` returns them in insertion order. Filters use JSONB
//! containment (`data @> filter`).

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use super::{DocumentStore, Result};
use crate::uuid::uuidv7;

/// Document store over a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<Uuid> {
        let id = uuidv7();
        sqlx::query("INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(document)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn find(&self, collection: &str, filter: &Value, limit: i64) -> Result<Vec<Value>> {
        let docs = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT data
            FROM documents
            WHERE collection = $1 AND data @> $2
            ORDER BY id ASC
            LIMIT $3
            "#,
        )
        .bind(collection)
        .bind(filter)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(docs)
    }

    async fn collection_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn database_name(&self) -> Result<String> {
        let name = sqlx::query_scalar::<_, String>("SELECT current_database()::text")
            .fetch_one(&self.pool)
            .await?;
        Ok(name)
    }
}
