//! Cart applier implementations
//!
//! Each applier implements the `CartApplier` trait and handles one kind of
//! cart mutation.

use enum_dispatch::enum_dispatch;
use shared::{Cart, MenuEntry};

use super::traits::CartApplier;

mod cart_cleared;
mod item_added;
mod item_removed;

pub use cart_cleared::CartClearedApplier;
pub use item_added::{ItemAddedApplier, apply_item_added};
pub use item_removed::{ItemRemovedApplier, apply_item_removed};

/// CartAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(CartApplier)]
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem(ItemAddedApplier),
    RemoveItem(ItemRemovedApplier),
    Clear(CartClearedApplier),
}

impl CartAction {
    pub fn add(entry: MenuEntry) -> Self {
        CartAction::AddItem(ItemAddedApplier { entry })
    }

    pub fn remove(name: impl Into<String>) -> Self {
        CartAction::RemoveItem(ItemRemovedApplier { name: name.into() })
    }

    pub fn clear() -> Self {
        CartAction::Clear(CartClearedApplier)
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::Clear(_) => "clear",
        }
    }
}
