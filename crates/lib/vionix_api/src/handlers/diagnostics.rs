//! Diagnostic endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::DiagnosticsResponse;
use crate::services::diagnostics;

/// `GET /test` — report store connectivity and configured environment.
pub async fn diagnostics_handler(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    Json(diagnostics::report(state.store.as_deref(), &state.config).await)
}
