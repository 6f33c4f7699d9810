//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are authored as `f64`; every sum goes through `Decimal` and is
//! rounded half-up to 2 decimal places before it is shown. Prices and
//! quantities are bounded upstream (`MAX_PRICE`, `MAX_QUANTITY`); the
//! arithmetic here saturates instead of panicking on anything past that.

use rust_decimal::prelude::*;
use shared::{Cart, CartLine, CheckoutLine};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// NaN / infinity become zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to 2 decimal places and fix the scale at 2 ("2000" → "2000.00")
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    rounded
}

/// Render an amount with exactly two decimals
pub fn format_money(value: Decimal) -> String {
    round_money(value).to_string()
}

/// Render an amount with the currency prefix, e.g. "Rs. 800.00"
pub fn format_price(currency: &str, value: Decimal) -> String {
    format!("{} {}", currency, format_money(value))
}

fn multiply(price: f64, quantity: u32) -> Decimal {
    round_money(to_decimal(price).saturating_mul(Decimal::from(quantity)))
}

fn sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    round_money(amounts.fold(Decimal::ZERO, Decimal::saturating_add))
}

/// price × quantity for one cart line
pub fn line_total(line: &CartLine) -> Decimal {
    multiply(line.price, line.quantity())
}

/// price × quantity for one checkout line
pub fn checkout_line_total(line: &CheckoutLine) -> Decimal {
    multiply(line.price, line.quantity.get())
}

/// Σ price × quantity over the cart; 0.00 for an empty cart
pub fn compute_total(cart: &Cart) -> Decimal {
    sum(cart.iter().map(line_total))
}

/// Σ price × quantity over checkout lines
pub fn checkout_total(lines: &[CheckoutLine]) -> Decimal {
    sum(lines.iter().map(checkout_line_total))
}

/// Σ quantity over the cart (badge count); 0 for an empty cart
pub fn cart_count(cart: &Cart) -> u32 {
    cart.iter().map(CartLine::quantity).sum()
}

/// Σ quantity over checkout lines
pub fn checkout_count(lines: &[CheckoutLine]) -> u32 {
    lines.iter().map(|l| l.quantity.get()).sum()
}
