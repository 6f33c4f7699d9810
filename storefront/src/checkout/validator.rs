//! Contact number rule

use super::CheckoutError;
use shared::CustomerField;

/// Canonical contact length: a 10-digit phone number
pub const DEFAULT_CONTACT_DIGITS: usize = 10;

/// Fixed-length, digits-only contact number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRule {
    digits: usize,
}

impl ContactRule {
    pub fn new(digits: usize) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Message naming the expected format
    pub fn message(&self) -> String {
        format!(
            "Please enter a valid {}-digit contact number.",
            self.digits
        )
    }

    pub fn is_valid(&self, value: &str) -> bool {
        value.len() == self.digits && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn validate(&self, value: &str) -> Result<(), CheckoutError> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(CheckoutError::validation(
                CustomerField::Contact,
                self.message(),
            ))
        }
    }
}

impl Default for ContactRule {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exactly_n_digits() {
        let rule = ContactRule::default();
        assert!(rule.is_valid("1234567890"));
        assert!(rule.is_valid("0000000000"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let rule = ContactRule::default();
        assert!(!rule.is_valid("12345"));
        assert!(!rule.is_valid("123456789"));
        assert!(!rule.is_valid("12345678901"));
        assert!(!rule.is_valid(""));
    }

    #[test]
    fn test_rejects_non_digits() {
        let rule = ContactRule::default();
        assert!(!rule.is_valid("12345-7890"));
        assert!(!rule.is_valid("+123456789"));
        assert!(!rule.is_valid("12345 7890"));
        assert!(!rule.is_valid("abcdefghij"));
        // Non-ASCII digits do not count
        assert!(!rule.is_valid("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_configurable_length() {
        let rule = ContactRule::new(11);
        assert!(rule.is_valid("03001234567"));
        assert!(!rule.is_valid("1234567890"));
        assert_eq!(rule.message(), "Please enter a valid 11-digit contact number.");
    }

    #[test]
    fn test_validate_error_names_contact_field() {
        let err = ContactRule::default().validate("12345").unwrap_err();
        assert_eq!(err.field(), Some(CustomerField::Contact));
        assert_eq!(err.to_string(), "Please enter a valid 10-digit contact number.");
    }
}
