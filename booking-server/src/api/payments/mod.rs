//! Payment API

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/orders/{booking_id}", post(handler::create_order))
        .route("/verify", post(handler::verify))
}
