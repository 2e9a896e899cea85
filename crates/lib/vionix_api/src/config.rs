//! API server configuration.

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8000").
    pub bind_addr: String,
    /// PostgreSQL connection URL, if configured.
    pub database_url: Option<String>,
    /// Database name overriding the one in the URL, if configured.
    pub database_name: Option<String>,
}

impl ApiConfig {
    /// Whether `DATABASE_URL` was provided.
    pub fn database_url_set(&self) -> bool {
        self.database_url.is_some()
    }

    /// Whether `DATABASE_NAME` was provided.
    pub fn database_name_set(&self) -> bool {
        self.database_name.is_some()
    }
}

