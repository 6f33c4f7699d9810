//! 购物车
//!
//! - [`CartManager`] - 会话内购物车的唯一持有者
//! - [`CartAction`] - 购物车变更 (AddItem / RemoveItem / Clear)
//! - [`CartApplier`] - 纯函数式 applier trait

mod traits;

pub mod appliers;
pub mod manager;

pub use appliers::{CartAction, apply_item_added as add_item, apply_item_removed as remove_item};
pub use manager::CartManager;
pub use traits::CartApplier;

pub use crate::money::{cart_count, compute_total};
