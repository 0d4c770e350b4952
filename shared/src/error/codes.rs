//! Unified error codes for the booking platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Catalog errors
//! - 4xxx: Booking errors
//! - 5xxx: Payment errors
//! - 6xxx: Data transfer errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so clients can switch on a number
/// instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Token was revoked by logout
    TokenRevoked = 1005,
    /// Password and confirmation differ
    PasswordMismatch = 1006,
    /// Email is already registered
    EmailAlreadyTaken = 1007,

    // ==================== 2xxx: Permission ====================
    /// Admin role required
    AdminRequired = 2002,
    /// Role is not one of the known roles
    InvalidRole = 2003,

    // ==================== 3xxx: Catalog ====================
    /// Hotel not found
    HotelNotFound = 3001,
    /// Catering not found
    CateringNotFound = 3002,
    /// Vendor not found
    VendorNotFound = 3003,
    /// Event not found
    EventNotFound = 3004,
    /// Price is not a non-negative integer
    InvalidPrice = 3005,

    // ==================== 4xxx: Booking ====================
    /// Booking not found (or not owned by the caller)
    BookingNotFound = 4001,
    /// Booking is already paid
    BookingAlreadyPaid = 4002,
    /// Event date is malformed
    InvalidEventDate = 4003,

    // ==================== 5xxx: Payment ====================
    /// Verification payload is incomplete
    InvalidPaymentPayload = 5002,
    /// Signature did not match
    PaymentVerificationFailed = 5003,
    /// Gateway rejected the request or could not be reached
    PaymentGatewayError = 5004,
    /// Booking disappeared between verification and status update
    BookingMissingAfterPayment = 5005,
    /// Gateway credentials are not configured
    PaymentNotConfigured = 5006,

    // ==================== 6xxx: Data transfer ====================
    /// Import was requested without confirmation
    ImportNotConfirmed = 6001,
    /// Import failed
    ImportFailed = 6002,
    /// Export failed
    ExportFailed = 6003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Document store is not available
    StoreUnavailable = 9006,
    /// Receipt document could not be rendered
    ReceiptRenderFailed = 9007,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field missing",

            // Auth
            ErrorCode::NotAuthenticated => "Please login to access this page",
            ErrorCode::InvalidCredentials => "Invalid credentials",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",
            ErrorCode::TokenRevoked => "Session has ended, please login again",
            ErrorCode::PasswordMismatch => "Password and Confirm Password do not match",
            ErrorCode::EmailAlreadyTaken => "User Email Already Taken",

            // Permission
            ErrorCode::AdminRequired => "Admin access required.",
            ErrorCode::InvalidRole => "Invalid role selected.",

            // Catalog
            ErrorCode::HotelNotFound => "Hotel not found",
            ErrorCode::CateringNotFound => "Catering not found",
            ErrorCode::VendorNotFound => "Vendor not found",
            ErrorCode::EventNotFound => "Event not found",
            ErrorCode::InvalidPrice => "Price must be a non-negative whole number",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::BookingAlreadyPaid => "Payment already completed",
            ErrorCode::InvalidEventDate => "Invalid event date, expected YYYY-MM-DD",

            // Payment
            ErrorCode::InvalidPaymentPayload => "Invalid payment verification payload.",
            ErrorCode::PaymentVerificationFailed => {
                "Payment verification failed. Please try again."
            }
            ErrorCode::PaymentGatewayError => "Payment gateway error",
            ErrorCode::BookingMissingAfterPayment => "Booking not found after payment.",
            ErrorCode::PaymentNotConfigured => "Payment gateway keys are not configured",

            // Data transfer
            ErrorCode::ImportNotConfirmed => "Import replaces whole collections and must be confirmed",
            ErrorCode::ImportFailed => "Import failed",
            ErrorCode::ExportFailed => "Export failed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::StoreUnavailable => "Document store is not available",
            ErrorCode::ReceiptRenderFailed => "Failed to render receipt",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::TokenRevoked),
            1006 => Ok(ErrorCode::PasswordMismatch),
            1007 => Ok(ErrorCode::EmailAlreadyTaken),

            // Permission
            2002 => Ok(ErrorCode::AdminRequired),
            2003 => Ok(ErrorCode::InvalidRole),

            // Catalog
            3001 => Ok(ErrorCode::HotelNotFound),
            3002 => Ok(ErrorCode::CateringNotFound),
            3003 => Ok(ErrorCode::VendorNotFound),
            3004 => Ok(ErrorCode::EventNotFound),
            3005 => Ok(ErrorCode::InvalidPrice),

            // Booking
            4001 => Ok(ErrorCode::BookingNotFound),
            4002 => Ok(ErrorCode::BookingAlreadyPaid),
            4003 => Ok(ErrorCode::InvalidEventDate),

            // Payment
            5002 => Ok(ErrorCode::InvalidPaymentPayload),
            5003 => Ok(ErrorCode::PaymentVerificationFailed),
            5004 => Ok(ErrorCode::PaymentGatewayError),
            5005 => Ok(ErrorCode::BookingMissingAfterPayment),
            5006 => Ok(ErrorCode::PaymentNotConfigured),

            // Data transfer
            6001 => Ok(ErrorCode::ImportNotConfirmed),
            6002 => Ok(ErrorCode::ImportFailed),
            6003 => Ok(ErrorCode::ExportFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9006 => Ok(ErrorCode::StoreUnavailable),
            9007 => Ok(ErrorCode::ReceiptRenderFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
