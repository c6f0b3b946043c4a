//! Health check endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct PingResponse {
    /// Always `"pong"`.
    pub message: &'static str,
}

/// Health check handler.
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}
