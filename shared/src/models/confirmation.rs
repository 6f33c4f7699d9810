//! Order Confirmation Model

use super::PaymentMethod;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Terminal acknowledgment produced by a successful checkout
///
/// Nothing is persisted; the reference only lets the customer quote the
/// order back during the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub reference: Uuid,
    pub payment_method: PaymentMethod,
    /// Sum of line quantities
    pub item_count: u32,
    /// Grand total, 2 decimal places
    pub total: Decimal,
    pub confirmed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    pub fn new(payment_method: PaymentMethod, item_count: u32, total: Decimal) -> Self {
        Self {
            reference: Uuid::new_v4(),
            payment_method,
            item_count,
            total,
            confirmed_at: Utc::now(),
        }
    }

    /// Notice shown to the customer
    pub fn message(&self) -> String {
        format!("Order confirmed! Payment method: {}", self.payment_method)
    }

    /// First 8 hex digits of the reference, for display
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}
