//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / checkout errors
//! - 5xxx: Payment errors
//! - 6xxx: Product (menu) errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Order ====================
    /// Cart has no lines
    CartEmpty = 4007,
    /// Order has already been confirmed
    OrderAlreadyConfirmed = 4003,
    /// Checkout has not been started
    CheckoutNotStarted = 4010,

    // ==================== 5xxx: Payment ====================
    /// Payment method is not supported in this build
    PaymentMethodUnsupported = 5003,

    // ==================== 6xxx: Product ====================
    /// Menu entry not found
    ProductNotFound = 6001,
    /// Menu entry has an invalid price
    ProductInvalidPrice = 6002,
    /// Two menu entries share the same name
    ProductNameExists = 6004,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
    /// File could not be read
    IoError = 9006,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Order
            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::OrderAlreadyConfirmed => "Order has already been confirmed",
            ErrorCode::CheckoutNotStarted => "Checkout has not been started",

            // Payment
            ErrorCode::PaymentMethodUnsupported => "Payment method is not available",

            // Product
            ErrorCode::ProductNotFound => "Menu item not found",
            ErrorCode::ProductInvalidPrice => "Menu item has invalid price",
            ErrorCode::ProductNameExists => "Menu item name already exists",

            // System
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::IoError => "File could not be read",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Order
            4003 => Ok(ErrorCode::OrderAlreadyConfirmed),
            4007 => Ok(ErrorCode::CartEmpty),
            4010 => Ok(ErrorCode::CheckoutNotStarted),

            // Payment
            5003 => Ok(ErrorCode::PaymentMethodUnsupported),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6004 => Ok(ErrorCode::ProductNameExists),

            // System
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
