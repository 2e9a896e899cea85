//! Liveness and greeting endpoints.

use axum::Json;

use crate::models::{HelloResponse, RootResponse};

/// `GET /` — liveness payload.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: vionix_core::hello::SERVICE_NAME.to_string(),
        status: "ok".to_string(),
        message: vionix_core::hello::status_message(),
    })
}

/// `GET /api/hello` — static greeting.
pub async fn hello_world() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: vionix_core::hello::hello_world(),
    })
}
