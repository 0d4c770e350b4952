//! Payment Handlers
//!
//! Order creation checks the booking before the gateway configuration, so a
//! paid or missing booking is reported as such on any server. Verification
//! checks the configuration first.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{CreateOrderResponse, VerifyPaymentRequest, VerifyPaymentResponse};
use shared::{ApiResponse, AppResult};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::payment::service::PaymentService;

/// POST /api/payments/orders/{booking_id}
pub async fn create_order(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(booking_id): Path<String>,
) -> AppResult<ApiResponse<CreateOrderResponse>> {
    let service = PaymentService::new(state.db()?);
    let booking = service.payable_booking(&user, &booking_id).await?;
    let gateway = state.payment_gateway()?;
    let order = service.open_order(gateway.as_ref(), &user, booking).await?;
    Ok(ApiResponse::success(order))
}

/// POST /api/payments/verify
///
/// A signature mismatch still answers 200 with `verified: false`.
pub async fn verify(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<VerifyPaymentRequest>,
) -> AppResult<ApiResponse<VerifyPaymentResponse>> {
    let gateway = state.payment_gateway()?;
    let service = PaymentService::new(state.db()?);
    let outcome = service.verify(gateway.as_ref(), &user, payload).await?;
    let message = outcome.message.clone();
    Ok(ApiResponse::success_with_message(message, outcome))
}
