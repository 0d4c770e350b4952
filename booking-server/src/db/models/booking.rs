//! Booking Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{AcceptStatus, PaymentStatus};
use surrealdb::RecordId;

pub const TABLE: &str = "booking";

/// Stored booking
///
/// References to hotel / catering / event are kept as `"table:key"` text so
/// a deleted catalog entry leaves a dangling but harmless reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Owner (`user:<key>`)
    pub user_id: String,
    pub event_date: NaiveDate,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub start_at: String,
    #[serde(default, deserialize_with = "shared::models::count")]
    pub max_total_hour: u32,
    #[serde(default, deserialize_with = "shared::models::count")]
    pub no_of_guest: u32,
    /// Whole currency units, always derived server-side
    #[serde(default, deserialize_with = "serde_helpers::amount")]
    pub amount: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub photographer_name_desc: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub dj_name_desc: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub makeupartist_name_desc: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub decorator_name_desc: String,
    /// Creation day, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub current_date: String,
    #[serde(default)]
    pub accept_status: AcceptStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "serde_helpers::optional_ref")]
    pub hotel_id: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_ref")]
    pub catering_id: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_ref")]
    pub event_id: Option<String>,
    /// RFC 3339 creation timestamp
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub created_at: String,
}

impl Booking {
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }

    /// Record key without the table prefix (used in file names)
    pub fn key_string(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.key().to_string())
            .unwrap_or_default()
    }
}

/// Fields an owner may change on an existing booking
///
/// Owner, creation day, creation time and both statuses are absent so an
/// update can never touch them. A `None` reference clears the stored one.
#[derive(Debug, Clone, Serialize)]
pub struct BookingChanges {
    pub event_date: NaiveDate,
    pub start_at: String,
    pub max_total_hour: u32,
    pub no_of_guest: u32,
    pub amount: i64,
    pub photographer_name_desc: String,
    pub dj_name_desc: String,
    pub makeupartist_name_desc: String,
    pub decorator_name_desc: String,
    pub hotel_id: Option<String>,
    pub catering_id: Option<String>,
    pub event_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_document_shapes() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "id": "booking:b1",
            "user_id": "user:u1",
            "event_date": "2025-03-14",
            "max_total_hour": "6",
            "no_of_guest": 250,
            "amount": 5100,
            "payment_status": 1,
            "hotel_id": "",
            "catering_id": "catering:c1",
            "dj_name_desc": null
        }))
        .unwrap();

        assert_eq!(booking.max_total_hour, 6);
        assert!(booking.payment_status.is_paid());
        assert_eq!(booking.accept_status, AcceptStatus::Pending);
        assert!(booking.hotel_id.is_none());
        assert_eq!(booking.catering_id.as_deref(), Some("catering:c1"));
        assert_eq!(booking.key_string(), "b1");
    }

    #[test]
    fn test_serializes_date_and_statuses() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "user_id": "user:u1",
            "event_date": "2025-12-01"
        }))
        .unwrap();
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["event_date"], "2025-12-01");
        assert_eq!(json["payment_status"], 0);
        assert!(json.get("id").is_none());
    }
}
