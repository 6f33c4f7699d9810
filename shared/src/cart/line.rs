use crate::models::MenuEntry;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Upper bound for a single line's quantity
pub const MAX_QUANTITY: u32 = 9999;

/// One distinct menu item present in the cart
///
/// `quantity` is always at least 1; a line that would drop to zero is
/// removed by the cart manager instead of being kept around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    quantity: NonZeroU32,
}

impl CartLine {
    /// New line for a menu entry with quantity 1
    pub fn from_entry(entry: &MenuEntry) -> Self {
        Self {
            name: entry.name.clone(),
            description: entry.description.clone(),
            price: entry.price,
            image: entry.image.clone(),
            quantity: NonZeroU32::MIN,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Copy of this line with quantity + 1, capped at [`MAX_QUANTITY`]
    pub fn incremented(&self) -> Self {
        if self.quantity.get() >= MAX_QUANTITY {
            tracing::debug!(item = %self.name, "Quantity already at maximum");
            return self.clone();
        }
        Self {
            quantity: self.quantity.saturating_add(1),
            ..self.clone()
        }
    }

    /// Copy of this line with quantity - 1, or `None` when it would reach zero
    pub fn decremented(&self) -> Option<Self> {
        let quantity = NonZeroU32::new(self.quantity.get() - 1)?;
        Some(Self {
            quantity,
            ..self.clone()
        })
    }

    /// Copy of this line with an explicit quantity, `None` for zero
    ///
    /// Quantities above [`MAX_QUANTITY`] are capped.
    pub fn with_quantity(&self, quantity: u32) -> Option<Self> {
        Some(Self {
            quantity: NonZeroU32::new(quantity.min(MAX_QUANTITY))?,
            ..self.clone()
        })
    }
}

/// Ordered cart lines, one per distinct item name
///
/// Insertion order is preserved; repeated adds update a line in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    pub fn get(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshot handed to checkout
    pub fn to_checkout_inputs(&self) -> Vec<super::CheckoutItemInput> {
        self.lines
            .iter()
            .map(|l| super::CheckoutItemInput {
                name: l.name.clone(),
                price: l.price,
                quantity: Some(l.quantity()),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn biryani() -> MenuEntry {
        MenuEntry::new("Biryani", "Rice", 800.0, "/biryani.jpg")
    }

    #[test]
    fn test_from_entry_starts_at_one() {
        let line = CartLine::from_entry(&biryani());
        assert_eq!(line.quantity(), 1);
        assert_eq!(line.name, "Biryani");
        assert_eq!(line.price, 800.0);
    }

    #[test]
    fn test_decrement_to_zero_is_none() {
        let line = CartLine::from_entry(&biryani());
        assert!(line.decremented().is_none());

        let two = line.incremented();
        assert_eq!(two.quantity(), 2);
        assert_eq!(two.decremented().unwrap().quantity(), 1);
        // input line untouched
        assert_eq!(line.quantity(), 1);
    }

    #[test]
    fn test_with_quantity_rejects_zero() {
        let line = CartLine::from_entry(&biryani());
        assert!(line.with_quantity(0).is_none());
        assert_eq!(line.with_quantity(5).unwrap().quantity(), 5);
    }

    #[test]
    fn test_quantity_capped() {
        let line = CartLine::from_entry(&biryani());
        let full = line.with_quantity(u32::MAX).unwrap();
        assert_eq!(full.quantity(), MAX_QUANTITY);
        assert_eq!(full.incremented().quantity(), MAX_QUANTITY);
    }

    #[test]
    fn test_cart_lookup() {
        let cart = Cart::from_lines(vec![CartLine::from_entry(&biryani())]);
        assert!(cart.contains("Biryani"));
        assert_eq!(cart.position("Biryani"), Some(0));
        assert!(cart.get("Manchurian").is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_to_checkout_inputs_carries_quantity() {
        let line = CartLine::from_entry(&biryani()).incremented();
        let inputs = Cart::from_lines(vec![line]).to_checkout_inputs();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].quantity, Some(2));
    }

    #[test]
    fn test_zero_quantity_rejected_on_deserialize() {
        let json = r#"[{"name":"Biryani","description":"","price":800.0,"image":"","quantity":0}]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }
}
