//! Account API: the caller's own profile

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/account", get(handler::get_profile).put(handler::update_profile))
}
