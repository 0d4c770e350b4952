//! Shared types for the booking platform
//!
//! Wire-level types used by the server and its API clients: the unified
//! error system, request/response DTOs and the small domain enums that
//! travel over the wire.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
