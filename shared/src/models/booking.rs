//! Booking payloads and status enums

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Payment state of a booking, stored as 0 / 1 / 2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum PaymentStatus {
    #[default]
    Unpaid = 0,
    Paid = 1,
    Failed = 2,
}

impl PaymentStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
        }
    }

    pub const fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

impl From<PaymentStatus> for u8 {
    fn from(status: PaymentStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for PaymentStatus {
    type Error = InvalidStatus;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PaymentStatus::Unpaid),
            1 => Ok(PaymentStatus::Paid),
            2 => Ok(PaymentStatus::Failed),
            other => Err(InvalidStatus(other)),
        }
    }
}

/// Acceptance state of a booking, stored as 0 / 1 / 2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum AcceptStatus {
    #[default]
    Pending = 0,
    Accepted = 1,
    Rejected = 2,
}

impl AcceptStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AcceptStatus::Pending => "Pending",
            AcceptStatus::Accepted => "Accepted",
            AcceptStatus::Rejected => "Rejected",
        }
    }
}

impl From<AcceptStatus> for u8 {
    fn from(status: AcceptStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for AcceptStatus {
    type Error = InvalidStatus;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AcceptStatus::Pending),
            1 => Ok(AcceptStatus::Accepted),
            2 => Ok(AcceptStatus::Rejected),
            other => Err(InvalidStatus(other)),
        }
    }
}

/// Error returned for an out-of-range status number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStatus(pub u8);

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status value: {}", self.0)
    }
}

impl std::error::Error for InvalidStatus {}

/// Create / update booking payload
///
/// There is intentionally no `amount` field: the server always derives it,
/// so a client-sent amount is dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Calendar date, `YYYY-MM-DD`
    pub event_date: String,
    #[serde(default)]
    pub start_at: String,
    #[serde(default, deserialize_with = "count")]
    pub max_total_hour: u32,
    #[serde(default, deserialize_with = "count")]
    pub no_of_guest: u32,
    #[serde(default)]
    pub photographer_name_desc: String,
    #[serde(default)]
    pub dj_name_desc: String,
    #[serde(default)]
    pub makeupartist_name_desc: String,
    #[serde(default)]
    pub decorator_name_desc: String,
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub catering_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
}

/// Deserialize a non-negative count from a number, a numeric string or null
///
/// Form-era documents stored counts as text, so both shapes are accepted.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Raw::Int(n)) => u32::try_from(n).map_err(D::Error::custom),
        Some(Raw::Float(f)) if f >= 0.0 && f <= u32::MAX as f64 => Ok(f as u32),
        Some(Raw::Float(f)) => Err(D::Error::custom(format!("count out of range: {f}"))),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(0),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("not a whole number: {s}"))),
    }
}
