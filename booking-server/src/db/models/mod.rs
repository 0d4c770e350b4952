//! Stored record types

pub mod serde_helpers;

pub mod booking;
pub mod catering;
pub mod event;
pub mod hotel;
pub mod user;
pub mod vendor;

pub use booking::{Booking, BookingChanges};
pub use catering::Catering;
pub use event::Event;
pub use hotel::Hotel;
pub use user::{ProfileChanges, User};
pub use vendor::Vendor;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ErrorCode;
use surrealdb::RecordId;

/// A catalog entity managed through the generic catalog repository
///
/// Implemented by hotels, caterings, vendors and events. Creation and update
/// payloads come from `shared::models`.
pub trait CatalogRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// SurrealDB table
    const TABLE: &'static str;
    /// Human label used in messages
    const LABEL: &'static str;
    /// Field the listing is sorted by
    const ORDER_BY: &'static str;
    /// Error reported when a lookup misses
    const NOT_FOUND: ErrorCode;

    type Create: DeserializeOwned + Send + 'static;
    type Update: Serialize + DeserializeOwned + Send + Sync + 'static;

    fn from_create(data: Self::Create) -> Self;

    fn id(&self) -> Option<&RecordId>;

    /// Drop the id so the store assigns one
    fn clear_id(&mut self);

    /// Display name (`hotel_name`, `catername`, ...)
    fn name(&self) -> &str;

    /// New display name carried by an update payload, if present
    fn update_name(_data: &Self::Update) -> Option<&str> {
        None
    }

    /// Price text carried by a create payload, if the entity has one
    fn create_price(_data: &Self::Create) -> Option<&str> {
        None
    }

    /// Price text carried by an update payload, if present
    fn update_price(_data: &Self::Update) -> Option<&str> {
        None
    }
}
