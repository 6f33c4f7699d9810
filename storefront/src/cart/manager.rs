//! CartManager - owner of the session cart
//!
//! Holds the current [`Cart`] and replaces it wholesale with whatever the
//! applier returns. Nothing outside this type mutates the cart.

use super::appliers::CartAction;
use super::traits::CartApplier;
use crate::money;
use rust_decimal::Decimal;
use shared::{Cart, CheckoutItemInput, MenuEntry};

#[derive(Debug, Clone, Default)]
pub struct CartManager {
    cart: Cart,
}

impl CartManager {
    /// Empty cart (component mount)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Apply one action and swap in the resulting cart
    pub fn apply(&mut self, action: CartAction) -> &Cart {
        let next = action.apply(&self.cart);
        tracing::debug!(
            action = action.kind(),
            lines_before = self.cart.len(),
            lines_after = next.len(),
            "Cart updated"
        );
        self.cart = next;
        &self.cart
    }

    pub fn add_item(&mut self, entry: &MenuEntry) -> &Cart {
        tracing::info!(item = %entry.name, "Item added to cart");
        self.apply(CartAction::add(entry.clone()))
    }

    /// Remove one unit; unknown names leave the cart untouched
    pub fn remove_item(&mut self, name: &str) -> &Cart {
        if !self.cart.contains(name) {
            tracing::debug!(item = %name, "Remove ignored, item not in cart");
            return &self.cart;
        }
        tracing::info!(item = %name, "Item removed from cart");
        self.apply(CartAction::remove(name))
    }

    pub fn clear(&mut self) {
        self.apply(CartAction::clear());
    }

    pub fn total(&self) -> Decimal {
        money::compute_total(&self.cart)
    }

    pub fn count(&self) -> u32 {
        money::cart_count(&self.cart)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Snapshot handed to checkout
    pub fn checkout_snapshot(&self) -> Vec<CheckoutItemInput> {
        self.cart.to_checkout_inputs()
    }
}
