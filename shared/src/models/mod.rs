//! Data models
//!
//! Payloads and small domain enums shared between the server and API
//! clients. Stored record types live with the server's store layer.

pub mod booking;
pub mod catalog;
pub mod payment;
pub mod role;
pub mod transfer;

// Re-exports
pub use booking::*;
pub use catalog::*;
pub use payment::*;
pub use role::*;
pub use transfer::*;
