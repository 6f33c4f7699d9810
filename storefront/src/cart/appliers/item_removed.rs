//! RemoveItem applier
//!
//! quantity > 1: decrement by one. quantity == 1: drop the line.
//! Unknown name: no change.

use crate::cart::traits::CartApplier;
use shared::Cart;

/// RemoveItem applier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRemovedApplier {
    pub name: String,
}

impl CartApplier for ItemRemovedApplier {
    fn apply(&self, cart: &Cart) -> Cart {
        apply_item_removed(cart, &self.name)
    }
}

/// Remove one unit of `name`, producing a new cart
pub fn apply_item_removed(cart: &Cart, name: &str) -> Cart {
    let lines = cart
        .iter()
        .filter_map(|line| {
            if line.name == name {
                line.decremented()
            } else {
                Some(line.clone())
            }
        })
        .collect();
    Cart::from_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::appliers::apply_item_added;
    use shared::MenuEntry;

    fn cart_of(items: &[(&str, u32)]) -> Cart {
        let mut cart = Cart::new();
        for (name, qty) in items {
            for _ in 0..*qty {
                cart = apply_item_added(&cart, &MenuEntry::new(*name, "", 100.0, ""));
            }
        }
        cart
    }

    #[test]
    fn test_remove_last_unit_drops_line_and_keeps_order() {
        let cart = cart_of(&[("A", 2), ("B", 1), ("C", 3)]);
        let after = apply_item_removed(&cart, "B");

        let view: Vec<(&str, u32)> = after.iter().map(|l| (l.name.as_str(), l.quantity())).collect();
        assert_eq!(view, vec![("A", 2), ("C", 3)]);
    }

    #[test]
    fn test_remove_decrements_only_that_line() {
        let cart = cart_of(&[("A", 2), ("B", 1), ("C", 3)]);
        let after = apply_item_removed(&cart, "C");

        let view: Vec<(&str, u32)> = after.iter().map(|l| (l.name.as_str(), l.quantity())).collect();
        assert_eq!(view, vec![("A", 2), ("B", 1), ("C", 2)]);
    }

    #[test]
    fn test_remove_unknown_name_is_noop() {
        let cart = cart_of(&[("A", 1)]);
        assert_eq!(apply_item_removed(&cart, "Z"), cart);
        assert_eq!(apply_item_removed(&Cart::new(), "Z"), Cart::new());
    }

    #[test]
    fn test_never_keeps_zero_quantity_line() {
        let mut cart = cart_of(&[("A", 3)]);
        for _ in 0..5 {
            cart = apply_item_removed(&cart, "A");
            assert!(cart.iter().all(|l| l.quantity() >= 1));
        }
        assert!(cart.is_empty());
    }
}
