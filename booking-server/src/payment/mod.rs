//! Payment gateway integration
//!
//! The gateway sits behind [`PaymentGateway`]; production uses
//! [`RazorpayGateway`] (REST over `reqwest`, no SDK). The booking-side
//! workflow lives in [`service`].

pub mod razorpay;
pub mod service;
pub mod signature;

pub use razorpay::RazorpayGateway;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment gateway not configured: {0} is missing")]
    NotConfigured(&'static str),

    #[error("Gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gateway rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Signature mismatch")]
    SignatureMismatch,

    #[error("Malformed signature")]
    MalformedSignature,

    #[error("Signing key rejected")]
    InvalidKey,
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::NotConfigured(setting) => {
                AppError::not_configured(ErrorCode::PaymentNotConfigured, setting)
            }
            PaymentError::Http(_) | PaymentError::Rejected { .. } => {
                AppError::with_message(ErrorCode::PaymentGatewayError, err.to_string())
            }
            PaymentError::SignatureMismatch
            | PaymentError::MalformedSignature
            | PaymentError::InvalidKey => {
                AppError::new(ErrorCode::PaymentVerificationFailed)
            }
        }
    }
}

/// Order creation request, in the gateway's wire shape
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderRequest {
    /// Minor currency units
    pub amount: i64,
    pub currency: String,
    /// Merchant-side label, `booking_<key>`
    pub receipt: String,
    pub payment_capture: u8,
    pub notes: BTreeMap<String, String>,
}

/// Order as returned by the gateway
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Values the checkout widget hands back after payment
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSignature {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Third-party payment processor
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Public key id handed to the client-side checkout
    fn key_id(&self) -> &str;

    /// Currency orders are opened in
    fn currency(&self) -> &str;

    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, PaymentError>;

    /// Fails with [`PaymentError::SignatureMismatch`] when the signature does
    /// not match the order and payment ids
    fn verify_signature(&self, signature: &PaymentSignature) -> Result<(), PaymentError>;
}
