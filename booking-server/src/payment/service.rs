//! Booking payment workflow
//!
//! Opens gateway orders for a caller's booking and applies verification
//! outcomes to its payment status. A signature mismatch is an ordinary
//! outcome (`verified: false`), not an error.

use std::collections::BTreeMap;
use shared::models::{CreateOrderResponse, PaymentStatus, VerifyPaymentRequest, VerifyPaymentResponse};
use shared::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{OrderRequest, PaymentGateway, PaymentSignature};
use crate::auth::CurrentUser;
use crate::booking::pricing;
use crate::booking::service::booking_id;
use crate::db::models::Booking;
use crate::db::repository::BookingRepository;
use crate::security_log;

pub const VERIFIED_MESSAGE: &str = "Payment successful! Your booking is confirmed.";
pub const FAILED_MESSAGE: &str = "Payment verification failed. Please try again.";

pub struct PaymentService {
    bookings: BookingRepository,
}

fn required(value: Option<String>) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::new(ErrorCode::InvalidPaymentPayload))
}

impl PaymentService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            bookings: BookingRepository::new(db),
        }
    }

    /// The caller's booking, provided it can still be paid
    ///
    /// Needs no gateway, so a paid or missing booking is reported as such
    /// even on a server without payment credentials.
    pub async fn payable_booking(&self, user: &CurrentUser, booking_ref: &str) -> AppResult<Booking> {
        let thing = booking_id(booking_ref)?;
        let booking = self
            .bookings
            .find_owned(&thing, &user.id)
            .await?
            .ok_or_else(AppError::booking_not_found)?;

        if booking.payment_status.is_paid() {
            return Err(AppError::new(ErrorCode::BookingAlreadyPaid));
        }
        Ok(booking)
    }

    /// Open a gateway order for a booking returned by [`Self::payable_booking`]
    pub async fn open_order(
        &self,
        gateway: &dyn PaymentGateway,
        user: &CurrentUser,
        booking: Booking,
    ) -> AppResult<CreateOrderResponse> {
        let booking_id = booking.id_string();
        let mut notes = BTreeMap::new();
        notes.insert("booking_id".to_string(), booking_id.clone());
        notes.insert("user_id".to_string(), user.id.clone());

        let request = OrderRequest {
            amount: pricing::to_minor_units(booking.amount),
            currency: gateway.currency().to_string(),
            receipt: format!("booking_{}", booking.key_string()),
            payment_capture: 1,
            notes,
        };

        let order = gateway.create_order(request).await?;
        tracing::info!(
            booking_id = %booking_id,
            order_id = %order.id,
            amount = order.amount,
            "Payment order opened"
        );

        Ok(CreateOrderResponse {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: gateway.key_id().to_string(),
            booking_id,
            user: user.payer_info(),
        })
    }

    /// Check a payment signature and record the outcome on the booking
    ///
    /// Verifying an already paid booking again simply re-asserts the paid
    /// status.
    pub async fn verify(
        &self,
        gateway: &dyn PaymentGateway,
        user: &CurrentUser,
        payload: VerifyPaymentRequest,
    ) -> AppResult<VerifyPaymentResponse> {
        let signature = PaymentSignature {
            order_id: required(payload.razorpay_order_id)?,
            payment_id: required(payload.razorpay_payment_id)?,
            signature: required(payload.razorpay_signature)?,
        };
        let booking_ref = required(payload.booking_id)?;
        let thing = booking_id(&booking_ref).ok();

        match gateway.verify_signature(&signature) {
            Ok(()) => {
                let thing = thing.ok_or_else(|| AppError::new(ErrorCode::BookingMissingAfterPayment))?;
                let booking = self
                    .bookings
                    .set_payment_status(&thing, &user.id, PaymentStatus::Paid)
                    .await?
                    .ok_or_else(|| AppError::new(ErrorCode::BookingMissingAfterPayment))?;

                tracing::info!(
                    booking_id = %thing,
                    order_id = %signature.order_id,
                    payment_id = %signature.payment_id,
                    "Payment verified"
                );

                Ok(VerifyPaymentResponse {
                    verified: true,
                    booking_id: booking.id_string(),
                    payment_status: PaymentStatus::Paid,
                    message: VERIFIED_MESSAGE.to_string(),
                })
            }
            Err(e) => {
                security_log!(
                    WARN,
                    "payment_signature_rejected",
                    user_id = %user.id,
                    booking_id = %booking_ref,
                    order_id = %signature.order_id,
                    error = %e
                );

                let booking_id = match &thing {
                    Some(thing) => {
                        self.bookings
                            .set_payment_status(thing, &user.id, PaymentStatus::Failed)
                            .await?;
                        thing.to_string()
                    }
                    None => booking_ref,
                };

                Ok(VerifyPaymentResponse {
                    verified: false,
                    booking_id,
                    payment_status: PaymentStatus::Failed,
                    message: FAILED_MESSAGE.to_string(),
                })
            }
        }
    }
}
