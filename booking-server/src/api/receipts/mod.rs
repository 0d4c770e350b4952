//! Receipt download API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/receipts/{booking_id}", get(handler::download))
}
