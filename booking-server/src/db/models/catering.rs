//! Catering Model

use super::{CatalogRecord, serde_helpers};
use serde::{Deserialize, Serialize};
use shared::ErrorCode;
use shared::models::{CateringCreate, CateringUpdate};
use surrealdb::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catering {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub catername: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub cater_desc: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub cater_location: String,
    /// Whole currency units, as text
    #[serde(default, deserialize_with = "serde_helpers::price_text")]
    pub cater_price: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub cater_img: String,
}

impl CatalogRecord for Catering {
    const TABLE: &'static str = "catering";
    const LABEL: &'static str = "Catering";
    const ORDER_BY: &'static str = "catername";
    const NOT_FOUND: ErrorCode = ErrorCode::CateringNotFound;

    type Create = CateringCreate;
    type Update = CateringUpdate;

    fn from_create(data: CateringCreate) -> Self {
        Self {
            id: None,
            catername: data.catername,
            cater_desc: data.cater_desc.unwrap_or_default(),
            cater_location: data.cater_location.unwrap_or_default(),
            cater_price: data.cater_price.unwrap_or_default(),
            cater_img: data.cater_img.unwrap_or_default(),
        }
    }

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn name(&self) -> &str {
        &self.catername
    }

    fn update_name(data: &CateringUpdate) -> Option<&str> {
        data.catername.as_deref()
    }

    fn create_price(data: &CateringCreate) -> Option<&str> {
        data.cater_price.as_deref()
    }

    fn update_price(data: &CateringUpdate) -> Option<&str> {
        data.cater_price.as_deref()
    }
}
