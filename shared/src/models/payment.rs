//! Payment payloads

use serde::{Deserialize, Serialize};

use super::PaymentStatus;

/// Payer details handed to the client-side checkout widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayerInfo {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Result of opening a gateway order for a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order_id: String,
    /// Amount in the gateway's minor currency unit
    pub amount: i64,
    pub currency: String,
    /// Public key id the checkout widget needs
    pub key_id: String,
    pub booking_id: String,
    pub user: PayerInfo,
}

/// Payment verification callback payload
///
/// Every field is optional at the type level so that a missing one is
/// reported as an invalid payload rather than a body parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,
    #[serde(default)]
    pub razorpay_signature: Option<String>,
    #[serde(default)]
    pub booking_id: Option<String>,
}

/// Outcome of a verification
///
/// A signature mismatch is a normal business outcome and is reported here
/// with `verified == false`, not as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    pub verified: bool,
    pub booking_id: String,
    pub payment_status: PaymentStatus,
    pub message: String,
}
