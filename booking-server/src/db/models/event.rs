//! Event Model

use super::{CatalogRecord, serde_helpers};
use serde::{Deserialize, Serialize};
use shared::ErrorCode;
use shared::models::{EventCreate, EventUpdate};
use surrealdb::RecordId;

/// Event type (wedding, birthday, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub eventname: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub event_desc: String,
}

impl CatalogRecord for Event {
    const TABLE: &'static str = "event";
    const LABEL: &'static str = "Event";
    const ORDER_BY: &'static str = "eventname";
    const NOT_FOUND: ErrorCode = ErrorCode::EventNotFound;

    type Create = EventCreate;
    type Update = EventUpdate;

    fn from_create(data: EventCreate) -> Self {
        Self {
            id: None,
            eventname: data.eventname,
            event_desc: data.event_desc.unwrap_or_default(),
        }
    }

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn name(&self) -> &str {
        &self.eventname
    }

    fn update_name(data: &EventUpdate) -> Option<&str> {
        data.eventname.as_deref()
    }
}
