use super::MAX_QUANTITY;
use crate::models::MAX_PRICE;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Item as it crosses into checkout
///
/// `quantity` may be absent or zero when produced by a loose caller; it is
/// normalized exactly once by [`CheckoutLine::from_input`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItemInput {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// Normalized checkout line (1 ≤ quantity ≤ MAX_QUANTITY, 0 ≤ price ≤ MAX_PRICE)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutLine {
    pub name: String,
    pub price: f64,
    pub quantity: NonZeroU32,
}

impl CheckoutLine {
    pub fn from_input(input: &CheckoutItemInput) -> Self {
        let quantity = input
            .quantity
            .and_then(|q| NonZeroU32::new(q.min(MAX_QUANTITY)))
            .unwrap_or(NonZeroU32::MIN);

        let price = if input.price.is_finite() && (0.0..=MAX_PRICE).contains(&input.price) {
            input.price
        } else {
            tracing::warn!(item = %input.name, price = input.price, "Invalid checkout price, using 0");
            0.0
        };

        Self {
            name: input.name.clone(),
            price,
            quantity,
        }
    }

    pub fn from_inputs(inputs: &[CheckoutItemInput]) -> Vec<Self> {
        inputs.iter().map(Self::from_input).collect()
    }
}
