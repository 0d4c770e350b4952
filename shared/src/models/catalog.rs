//! Catalog payloads (hotels, caterings, vendors, events)
//!
//! Field names follow the stored documents so exported snapshots and API
//! payloads read the same. Prices are text; the server checks them on write.

use serde::{Deserialize, Serialize};

/// Create hotel payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelCreate {
    pub hotel_name: String,
    #[serde(default)]
    pub hotel_desc: Option<String>,
    #[serde(default)]
    pub hotel_img1: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Update hotel payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_img1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Create catering payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CateringCreate {
    pub catername: String,
    #[serde(default)]
    pub cater_desc: Option<String>,
    #[serde(default)]
    pub cater_location: Option<String>,
    #[serde(default)]
    pub cater_price: Option<String>,
    #[serde(default)]
    pub cater_img: Option<String>,
}

/// Update catering payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CateringUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catername: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cater_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cater_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cater_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cater_img: Option<String>,
}

/// Create vendor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorCreate {
    pub vendorname: String,
    #[serde(default)]
    pub vendor_desc: Option<String>,
    #[serde(default)]
    pub vendor_location: Option<String>,
    #[serde(default)]
    pub vendor_price: Option<String>,
    #[serde(default)]
    pub vendor_img: Option<String>,
}

/// Update vendor payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendorname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_img: Option<String>,
}

/// Create event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub eventname: String,
    #[serde(default)]
    pub event_desc: Option<String>,
}

/// Update event payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_desc: Option<String>,
}
