//! # vionix_api
//!
//! HTTP API library for Vionix.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vionix_core::store::DocumentStore;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::handlers::{chat, diagnostics, hello, messages};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Document store, absent when no database could be reached.
    pub store: Option<Arc<dyn DocumentStore>>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// The document store, or `DbUnavailable` when there is none.
    pub fn store(&self) -> AppResult<&dyn DocumentStore> {
        self.store.as_deref().ok_or(AppError::DbUnavailable)
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_ROOT, get(hello::root))
        .route(routes::GET_API_HELLO, get(hello::hello_world))
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .route(routes::GET_API_MESSAGES, get(messages::list_messages_handler))
        .route(routes::GET_TEST, get(diagnostics::diagnostics_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
