//! Auth API
//!
//! | Path | Method | Guard |
//! |------|--------|-------|
//! | /api/auth/register | POST | public |
//! | /api/auth/login | POST | public |
//! | /api/auth/logout | POST | authenticated |
//! | /api/auth/me | GET | authenticated |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub use handler::{MIN_PASSWORD_LEN, validate_registration};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout))
        .route("/me", get(handler::me))
}
