//! Bulk data transfer API (admin only)
//!
//! - POST /api/admin/export: write every collection to `WORK_DIR/data`
//! - POST /api/admin/import: replace collections from `WORK_DIR/data`

mod handler;

use axum::{Router, middleware, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/export", post(handler::export))
        .route("/api/admin/import", post(handler::import))
        .layer(middleware::from_fn(require_admin))
}
