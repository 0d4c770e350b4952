//! Receipt generation
//!
//! [`layout`] decides what goes on the document, [`pdf`] draws it.

pub mod layout;
pub mod pdf;

pub use layout::{ReceiptDocument, build_receipt, receipt_file_name};
pub use pdf::{DocumentRenderer, PdfRenderer};

use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::auth::CurrentUser;
use crate::booking::BookingService;

#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("Failed to render receipt: {0}")]
    Render(String),
}

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        AppError::with_message(ErrorCode::ReceiptRenderFailed, err.to_string())
    }
}

/// A rendered receipt
#[derive(Debug, Clone)]
pub struct RenderedReceipt {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Lay out and render the receipt for one of the caller's bookings
pub async fn generate(
    bookings: &BookingService,
    renderer: &dyn DocumentRenderer,
    user: &CurrentUser,
    booking_id: &str,
    currency: &str,
) -> Result<RenderedReceipt, AppError> {
    let view = bookings.view(user, booking_id).await?;
    let today = chrono::Local::now().date_naive();
    let document = build_receipt(&view, user, today, currency);
    let bytes = renderer.render(&document)?;

    tracing::info!(
        booking_id = %view.booking.id_string(),
        file_name = %document.file_name,
        size = bytes.len(),
        "Receipt generated"
    );

    Ok(RenderedReceipt {
        file_name: document.file_name,
        content_type: renderer.content_type(),
        bytes,
    })
}
