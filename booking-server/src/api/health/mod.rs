//! Health check route (public)
//!
//! ```json
//! { "code": 0, "message": "OK",
//!   "data": { "status": "ok", "version": "0.1.0", "database": "ok", "payment_gateway": "configured" } }
//! ```

use axum::{Router, extract::State, routing::get};
use serde::Serialize;
use shared::ApiResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    pub status: &'static str,
    pub version: &'static str,
    /// ok | unavailable
    pub database: &'static str,
    /// configured | not_configured
    pub payment_gateway: &'static str,
}

pub async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    let database_ok = match state.db() {
        Ok(db) => db.health().await.is_ok(),
        Err(_) => false,
    };

    ApiResponse::success(HealthResponse {
        status: if database_ok { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if database_ok { "ok" } else { "unavailable" },
        payment_gateway: if state.has_payment_gateway() {
            "configured"
        } else {
            "not_configured"
        },
    })
}
