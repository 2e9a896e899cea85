//! Vionix API server binary.
//!
//! Serves the chat API. Conversation history goes to PostgreSQL when a
//! database is configured and reachable; otherwise the store-backed
//! endpoints answer 500 until the server is restarted with one.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::{info, warn};
use vionix_api::config::ApiConfig;
use vionix_core::store::{DocumentStore, MemoryDocumentStore, PgDocumentStore};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "vionix_api_server", about = "Vionix chat API server", version)]
struct Args {
    /// Host to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// PostgreSQL connection URL. Without it the server runs with no store.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Database name, overriding the one in the connection URL.
    #[arg(long, env = "DATABASE_NAME")]
    database_name: Option<String>,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Keep conversation history in memory instead of PostgreSQL.
    #[arg(long, default_value_t = false, conflicts_with = "database_url")]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vionix_api=debug,vionix_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    info!(
        version = vionix_core::version(),
        host = %args.host,
        port = args.port,
        "starting vionix_api_server"
    );

    let config = ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        database_url: args.database_url.clone().filter(|v| !v.is_empty()),
        database_name: args.database_name.clone().filter(|v| !v.is_empty()),
    };

    let store = open_store(&args, &config).await;
    if let Some(store) = &store {
        match store.database_name().await {
            Ok(name) => info!(database = %name, "document store ready"),
            Err(e) => warn!(error = %e, "document store ready, database name unknown"),
        }
    }

    let state = vionix_api::AppState {
        store,
        config: config.clone(),
    };
    let app = vionix_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Pick the document store. Connection problems are logged and leave the
/// server running without one.
async fn open_store(args: &Args, config: &ApiConfig) -> Option<Arc<dyn DocumentStore>> {
    if args.in_memory {
        warn!("using in-memory store; history is lost on restart");
        return Some(Arc::new(MemoryDocumentStore::new()));
    }

    let Some(url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set; chat history is unavailable");
        return None;
    };

    match connect(url, config.database_name.as_deref(), args.max_connections).await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            warn!(error = %e, "database unavailable; chat history is disabled");
            None
        }
    }
}

async fn connect(
    url: &str,
    database_name: Option<&str>,
    max_connections: u32,
) -> Result<PgDocumentStore, Box<dyn std::error::Error>> {
    let mut options = PgConnectOptions::from_str(url)?;
    if let Some(name) = database_name {
        options = options.database(name);
    }

    info!(max_connections, "configuring connection pool");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await?;

    info!("running database migrations");
    vionix_core::migrate::migrate(&pool).await?;

    Ok(PgDocumentStore::new(pool))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
