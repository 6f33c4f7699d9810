//! AddItem applier
//!
//! An existing line (matched by name) gets quantity + 1; otherwise a new
//! line with quantity 1 is appended.

use crate::cart::traits::CartApplier;
use shared::{Cart, CartLine, MenuEntry};

/// AddItem applier
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAddedApplier {
    pub entry: MenuEntry,
}

impl CartApplier for ItemAddedApplier {
    fn apply(&self, cart: &Cart) -> Cart {
        apply_item_added(cart, &self.entry)
    }
}

/// Add one unit of `entry`, producing a new cart
pub fn apply_item_added(cart: &Cart, entry: &MenuEntry) -> Cart {
    if cart.contains(&entry.name) {
        let lines = cart
            .iter()
            .map(|line| {
                if line.name == entry.name {
                    line.incremented()
                } else {
                    line.clone()
                }
            })
            .collect();
        Cart::from_lines(lines)
    } else {
        let mut lines = cart.lines().to_vec();
        lines.push(CartLine::from_entry(entry));
        Cart::from_lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, price: f64) -> MenuEntry {
        MenuEntry::new(name, "", price, "")
    }

    #[test]
    fn test_add_new_item_appends_with_quantity_one() {
        let cart = apply_item_added(&Cart::new(), &entry("Biryani", 800.0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("Biryani").unwrap().quantity(), 1);
    }

    #[test]
    fn test_add_existing_item_increments_in_place() {
        let cart = apply_item_added(&Cart::new(), &entry("Biryani", 800.0));
        let cart = apply_item_added(&cart, &entry("Gulab Jamun", 400.0));
        let cart = apply_item_added(&cart, &entry("Biryani", 800.0));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].name, "Biryani");
        assert_eq!(cart.lines()[0].quantity(), 2);
        assert_eq!(cart.lines()[1].name, "Gulab Jamun");
        assert_eq!(cart.lines()[1].quantity(), 1);
    }

    #[test]
    fn test_input_cart_not_mutated() {
        let before = apply_item_added(&Cart::new(), &entry("Biryani", 800.0));
        let snapshot = before.clone();
        let _after = apply_item_added(&before, &entry("Biryani", 800.0));
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_one_line_per_name_quantity_equals_adds() {
        let names = ["A", "B", "A", "C", "A", "B"];
        let mut cart = Cart::new();
        for name in names {
            cart = apply_item_added(&cart, &entry(name, 1.0));
        }
        assert_eq!(cart.len(), 3);
        for name in ["A", "B", "C"] {
            let adds = names.iter().filter(|n| **n == name).count() as u32;
            assert_eq!(cart.get(name).unwrap().quantity(), adds);
        }
        let order: Vec<&str> = cart.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }
}
