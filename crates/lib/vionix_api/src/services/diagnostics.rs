//! Diagnostic report on store connectivity and configuration.

use tracing::warn;
use vionix_core::store::DocumentStore;

use crate::config::ApiConfig;
use crate::models::DiagnosticsResponse;

/// Maximum number of collection names included in the report.
const MAX_COLLECTIONS: usize = 10;

/// Maximum length of an error detail included in the report.
const MAX_ERROR_CHARS: usize = 50;

fn presence(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

/// Build the status report. Never fails; problems are described in the body.
pub async fn report(store: Option<&dyn DocumentStore>, config: &ApiConfig) -> DiagnosticsResponse {
    let mut resp = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "⚠️  Available but not initialized".to_string(),
        database_url: presence(config.database_url_set()),
        database_name: presence(config.database_name_set()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let Some(store) = store else {
        return resp;
    };

    resp.connection_status = "Connected".to_string();
    match store.collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            resp.collections = names;
            resp.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            warn!(error = %e, "listing collections failed");
            let detail: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
            resp.database = format!("⚠️  Connected but Error: {detail}");
        }
    }

    resp
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vionix_core::store::MemoryDocumentStore;

    fn config(url: bool, name: bool) -> ApiConfig {
        ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: url.then(|| "postgres://localhost/vionix".into()),
            database_name: name.then(|| "vionix".into()),
        }
    }

    #[tokio::test]
    async fn without_store_reports_not_connected() {
        let resp = report(None, &config(false, false)).await;
        assert_eq!(resp.connection_status, "Not Connected");
        assert_eq!(resp.database, "⚠️  Available but not initialized");
        assert_eq!(resp.database_url, "❌ Not Set");
        assert_eq!(resp.database_name, "❌ Not Set");
        assert!(resp.collections.is_empty());
    }

    #[tokio::test]
    async fn with_store_lists_at_most_ten_collections() {
        let store = MemoryDocumentStore::new();
        for i in 0..12 {
            store
                .insert(&format!("c{i:02}"), json!({}))
                .await
                .expect("insert");
        }

        let resp = report(Some(&store), &config(true, true)).await;
        assert_eq!(resp.connection_status, "Connected");
        assert_eq!(resp.database, "✅ Connected & Working");
        assert_eq!(resp.database_url, "✅ Set");
        assert_eq!(resp.database_name, "✅ Set");
        assert_eq!(resp.collections.len(), 10);
        assert_eq!(resp.collections[0], "c00");
    }
}
