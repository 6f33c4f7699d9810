use enum_dispatch::enum_dispatch;
use shared::Cart;

/// Cart mutation
///
/// Appliers are PURE: they read the current cart and return the next one,
/// never touching the input.
#[enum_dispatch]
pub trait CartApplier {
    fn apply(&self, cart: &Cart) -> Cart;
}
