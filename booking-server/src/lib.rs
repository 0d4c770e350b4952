//! Booking Server - event planning booking platform
//!
//! Customers browse a catalog of hotels, caterers, vendors and event types,
//! place bookings whose amount is derived from catalog prices, pay through
//! an external gateway and download a receipt. Admins manage the catalog,
//! user roles and bulk snapshots.
//!
//! ```text
//! booking-server/src/
//! ├── core/           # config, state, server
//! ├── auth/           # JWT, revocation, guards, middleware
//! ├── db/             # embedded SurrealDB, records, repositories
//! ├── booking/        # booking workflow and pricing
//! ├── payment/        # gateway adapter and verification
//! ├── receipt/        # receipt layout and PDF rendering
//! ├── data_transfer/  # JSON snapshot export / import
//! ├── api/            # HTTP handlers
//! ├── routes/         # router assembly
//! └── utils/          # logging, dates
//! ```

pub mod api;
pub mod auth;
pub mod booking;
pub mod core;
pub mod data_transfer;
pub mod db;
pub mod payment;
pub mod receipt;
pub mod routes;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use routes::{build_app, build_router};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};
pub use utils::init_logger;

/// Security event logging, target `security`
///
/// ```no_run
/// # use booking_server::security_log;
/// security_log!(WARN, "login_failed", email = "a@b.c", reason = "invalid_password");
/// security_log!(INFO, "role_changed", user_id = "user:1", role = "Admin");
/// ```
#[macro_export]
macro_rules! security_log {
    (WARN, $event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            $($arg)*
        );
    };
    (ERROR, $event:expr, $($arg:tt)*) => {
        tracing::error!(
            target: "security",
            event = $event,
            $($arg)*
        );
    };
    (INFO, $event:expr, $($arg:tt)*) => {
        tracing::info!(
            target: "security",
            event = $event,
            $($arg)*
        );
    };
}
