//! Receipt Handlers

use axum::{
    extract::{Path, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use shared::{AppError, AppResult};

use crate::auth::CurrentUser;
use crate::booking::BookingService;
use crate::core::ServerState;
use crate::receipt;

/// GET /api/receipts/{booking_id}
///
/// Streams the document back as an attachment.
pub async fn download(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(booking_id): Path<String>,
) -> AppResult<Response> {
    let bookings = BookingService::new(state.db()?);
    let rendered = receipt::generate(
        &bookings,
        state.receipt_renderer.as_ref(),
        &user,
        &booking_id,
        &state.config.payment.currency,
    )
    .await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        rendered.file_name
    ))
    .map_err(|e| AppError::internal(format!("Invalid receipt file name: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(rendered.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.bytes,
    )
        .into_response())
}
