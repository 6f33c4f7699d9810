//! Cart types
//!
//! - [`CartLine`] / [`Cart`]: the in-session cart owned by the catalog side
//! - [`CheckoutItemInput`] / [`CheckoutLine`]: the data contract handed to checkout

mod checkout;
mod line;

pub use checkout::{CheckoutItemInput, CheckoutLine};
pub use line::{Cart, CartLine, MAX_QUANTITY};
