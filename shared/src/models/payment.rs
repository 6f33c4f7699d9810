//! Payment Method Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment method selectable at checkout
///
/// Serialized with the short codes the checkout form uses ("COD" / "Online").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "COD")]
    CashOnDelivery,
    #[serde(rename = "Online")]
    Online,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CashOnDelivery, PaymentMethod::Online];

    /// Short code ("COD" / "Online")
    pub fn code(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "COD",
            Self::Online => "Online",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
            Self::Online => "Online Payment",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
