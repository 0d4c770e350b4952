//! HTTP API
//!
//! - [`health`] - liveness and store availability
//! - [`auth`] - register, login, logout, current identity
//! - [`account`] - the caller's own profile
//! - [`users`] - user directory and role changes (admin)
//! - [`catalog`] - hotels, caterings, vendors, events
//! - [`bookings`] - the caller's bookings
//! - [`payments`] - gateway orders and verification
//! - [`receipts`] - receipt documents
//! - [`data_transfer`] - bulk export / import (admin)

pub mod account;
pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod data_transfer;
pub mod health;
pub mod payments;
pub mod receipts;
pub mod users;
