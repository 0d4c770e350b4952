//! Vendor Model

use super::{CatalogRecord, serde_helpers};
use serde::{Deserialize, Serialize};
use shared::ErrorCode;
use shared::models::{VendorCreate, VendorUpdate};
use surrealdb::RecordId;

/// Listed service provider. Not referenced by bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub vendorname: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub vendor_desc: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub vendor_location: String,
    #[serde(default, deserialize_with = "serde_helpers::price_text")]
    pub vendor_price: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub vendor_img: String,
}

impl CatalogRecord for Vendor {
    const TABLE: &'static str = "vendor";
    const LABEL: &'static str = "Vendor";
    const ORDER_BY: &'static str = "vendorname";
    const NOT_FOUND: ErrorCode = ErrorCode::VendorNotFound;

    type Create = VendorCreate;
    type Update = VendorUpdate;

    fn from_create(data: VendorCreate) -> Self {
        Self {
            id: None,
            vendorname: data.vendorname,
            vendor_desc: data.vendor_desc.unwrap_or_default(),
            vendor_location: data.vendor_location.unwrap_or_default(),
            vendor_price: data.vendor_price.unwrap_or_default(),
            vendor_img: data.vendor_img.unwrap_or_default(),
        }
    }

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn name(&self) -> &str {
        &self.vendorname
    }

    fn update_name(data: &VendorUpdate) -> Option<&str> {
        data.vendorname.as_deref()
    }

    fn create_price(data: &VendorCreate) -> Option<&str> {
        data.vendor_price.as_deref()
    }

    fn update_price(data: &VendorUpdate) -> Option<&str> {
        data.vendor_price.as_deref()
    }
}
