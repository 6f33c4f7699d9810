use shared::{AppError, CustomerField, ErrorCode, PaymentMethod};
use thiserror::Error;

/// Checkout errors
///
/// All of these are input-shape failures: they block submission and leave
/// the form exactly as the customer typed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("{message}")]
    Validation {
        field: CustomerField,
        message: String,
    },

    #[error("{0} is coming soon")]
    UnsupportedPaymentMethod(PaymentMethod),

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Order has already been confirmed")]
    AlreadyConfirmed,
}

impl CheckoutError {
    pub fn validation(field: CustomerField, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Offending form field, if any
    pub fn field(&self) -> Option<CustomerField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        let message = err.to_string();
        match err {
            CheckoutError::Validation { field, .. } => {
                AppError::with_message(ErrorCode::ValidationFailed, message)
                    .with_detail("field", field.key())
            }
            CheckoutError::UnsupportedPaymentMethod(method) => {
                AppError::with_message(ErrorCode::PaymentMethodUnsupported, message)
                    .with_detail("payment_method", method.code())
            }
            CheckoutError::EmptyCart => AppError::with_message(ErrorCode::CartEmpty, message),
            CheckoutError::AlreadyConfirmed => {
                AppError::with_message(ErrorCode::OrderAlreadyConfirmed, message)
            }
        }
    }
}
