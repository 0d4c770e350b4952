//! Hotel Model

use super::{CatalogRecord, serde_helpers};
use serde::{Deserialize, Serialize};
use shared::ErrorCode;
use shared::models::{HotelCreate, HotelUpdate};
use surrealdb::RecordId;

/// Venue that can be attached to a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub hotel_name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub hotel_desc: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub hotel_img1: String,
    /// Whole currency units, as text
    #[serde(default, deserialize_with = "serde_helpers::price_text")]
    pub price: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub location: String,
}

impl CatalogRecord for Hotel {
    const TABLE: &'static str = "hotel";
    const LABEL: &'static str = "Hotel";
    const ORDER_BY: &'static str = "hotel_name";
    const NOT_FOUND: ErrorCode = ErrorCode::HotelNotFound;

    type Create = HotelCreate;
    type Update = HotelUpdate;

    fn from_create(data: HotelCreate) -> Self {
        Self {
            id: None,
            hotel_name: data.hotel_name,
            hotel_desc: data.hotel_desc.unwrap_or_default(),
            hotel_img1: data.hotel_img1.unwrap_or_default(),
            price: data.price.unwrap_or_default(),
            location: data.location.unwrap_or_default(),
        }
    }

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn name(&self) -> &str {
        &self.hotel_name
    }

    fn update_name(data: &HotelUpdate) -> Option<&str> {
        data.hotel_name.as_deref()
    }

    fn create_price(data: &HotelCreate) -> Option<&str> {
        data.price.as_deref()
    }

    fn update_price(data: &HotelUpdate) -> Option<&str> {
        data.price.as_deref()
    }
}
