//! Storefront data models

pub mod confirmation;
pub mod customer;
pub mod menu_entry;
pub mod payment;

pub use confirmation::OrderConfirmation;
pub use customer::{CustomerField, CustomerInfo, UnknownField};
pub use menu_entry::{MAX_PRICE, MenuEntry};
pub use payment::PaymentMethod;
