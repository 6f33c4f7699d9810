//! Clear applier

use crate::cart::traits::CartApplier;
use shared::Cart;

/// Clear applier - empties the cart (after a confirmed order)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartClearedApplier;

impl CartApplier for CartClearedApplier {
    fn apply(&self, _cart: &Cart) -> Cart {
        Cart::new()
    }
}
