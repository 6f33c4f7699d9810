//! Customer Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contact details collected by the checkout form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub address: String,
    pub contact: String,
}

impl CustomerInfo {
    /// Current value of a single field
    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Address => &self.address,
            CustomerField::Contact => &self.contact,
        }
    }

    /// Fields that are empty after trimming, in form order
    pub fn missing_fields(&self) -> Vec<CustomerField> {
        CustomerField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }
}

/// Form field of [`CustomerInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerField {
    Name,
    Address,
    Contact,
}

impl CustomerField {
    /// Form order
    pub const ALL: [CustomerField; 3] = [
        CustomerField::Name,
        CustomerField::Address,
        CustomerField::Contact,
    ];

    /// Field key as used by the form ("name", "address", "contact")
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Contact => "contact",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Address => "Address",
            Self::Contact => "Contact Number",
        }
    }

    /// Next field in form order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Address,
            Self::Address => Self::Contact,
            Self::Contact => Self::Name,
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field name that does not belong to [`CustomerInfo`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown customer field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for CustomerField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "address" => Ok(Self::Address),
            "contact" => Ok(Self::Contact),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str() {
        assert_eq!("name".parse::<CustomerField>(), Ok(CustomerField::Name));
        assert_eq!("contact".parse::<CustomerField>(), Ok(CustomerField::Contact));
        assert_eq!(
            "email".parse::<CustomerField>(),
            Err(UnknownField("email".to_string()))
        );
    }

    #[test]
    fn test_missing_fields_trims_whitespace() {
        let info = CustomerInfo {
            name: "Ayesha".to_string(),
            address: "   ".to_string(),
            contact: String::new(),
        };
        assert_eq!(
            info.missing_fields(),
            vec![CustomerField::Address, CustomerField::Contact]
        );
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(CustomerField::Contact.next(), CustomerField::Name);
    }
}
