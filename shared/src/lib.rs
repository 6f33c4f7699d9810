//! Shared types for the storefront
//!
//! Plain data types that cross the catalog/cart → checkout boundary,
//! plus the unified error system used by every crate in the workspace.

pub mod cart;
pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartLine, CheckoutItemInput, CheckoutLine, MAX_QUANTITY};
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    CustomerField, CustomerInfo, MAX_PRICE, MenuEntry, OrderConfirmation, PaymentMethod,
};
