//! Booking workflow
//!
//! - [`pricing`] - amount derivation from catalog prices
//! - [`BookingService`] - owner-scoped list / create / read / update / delete

pub mod pricing;
pub mod service;

pub use service::{BookingOptions, BookingService, BookingView};
