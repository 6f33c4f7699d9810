//! Menu Entry Model

use serde::{Deserialize, Serialize};

/// Upper bound for a unit price
pub const MAX_PRICE: f64 = 1_000_000.0;

/// A purchasable item authored in the menu seed table
///
/// The name doubles as the identity key inside the cart, so two entries in
/// one menu must never share a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub description: String,
    /// Unit price in the store currency
    pub price: f64,
    /// Image reference (path or URL), never resolved by this crate
    pub image: String,
}

impl MenuEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
        }
    }
}
