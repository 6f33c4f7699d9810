//! Checkout state machine
//!
//! ```text
//!            submit ok
//! Editing ───────────────► Confirmed (terminal)
//!    ▲  │
//!    │  │ submit rejected
//!    │  ▼
//! ValidationFailed
//!    (any edit returns to Editing)
//! ```

use super::form::apply_field_change;
use super::{CheckoutError, ContactRule};
use crate::money;
use rust_decimal::Decimal;
use shared::{
    CheckoutItemInput, CheckoutLine, CustomerField, CustomerInfo, OrderConfirmation, PaymentMethod,
};

/// Checkout rules fixed for the build / process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckoutPolicy {
    pub contact: ContactRule,
    pub online_payment_enabled: bool,
}

impl CheckoutPolicy {
    pub fn is_enabled(&self, method: PaymentMethod) -> bool {
        match method {
            PaymentMethod::CashOnDelivery => true,
            PaymentMethod::Online => self.online_payment_enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    Editing,
    ValidationFailed { error: CheckoutError },
    Confirmed(OrderConfirmation),
}

impl CheckoutState {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }

    /// The form still accepts input (a rejected submit does not lock it)
    pub fn is_editable(&self) -> bool {
        !self.is_confirmed()
    }

    /// Error of the last rejected submit, if the form has not been touched since
    pub fn error(&self) -> Option<&CheckoutError> {
        match self {
            Self::ValidationFailed { error } => Some(error),
            _ => None,
        }
    }
}

/// Validate and confirm an order
///
/// Checks run in order: empty cart, required fields, contact format,
/// payment method. Nothing is sent anywhere; the confirmation is the only
/// effect.
pub fn submit_order(
    info: &CustomerInfo,
    payment_method: PaymentMethod,
    lines: &[CheckoutLine],
    policy: &CheckoutPolicy,
) -> Result<OrderConfirmation, CheckoutError> {
    if lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    if let Some(field) = info.missing_fields().first() {
        return Err(CheckoutError::validation(
            *field,
            format!("{} is required", field.label()),
        ));
    }

    policy.contact.validate(&info.contact)?;

    if !policy.is_enabled(payment_method) {
        return Err(CheckoutError::UnsupportedPaymentMethod(payment_method));
    }

    Ok(OrderConfirmation::new(
        payment_method,
        money::checkout_count(lines),
        money::checkout_total(lines),
    ))
}

/// Checkout component state
#[derive(Debug, Clone)]
pub struct Checkout {
    lines: Vec<CheckoutLine>,
    customer: CustomerInfo,
    payment_method: PaymentMethod,
    policy: CheckoutPolicy,
    state: CheckoutState,
}

impl Checkout {
    /// Start a checkout from the cart snapshot (quantities normalized here)
    pub fn new(items: &[CheckoutItemInput], policy: CheckoutPolicy) -> Self {
        Self {
            lines: CheckoutLine::from_inputs(items),
            customer: CustomerInfo::default(),
            payment_method: PaymentMethod::CashOnDelivery,
            policy,
            state: CheckoutState::Editing,
        }
    }

    pub fn lines(&self) -> &[CheckoutLine] {
        &self.lines
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        match &self.state {
            CheckoutState::Confirmed(c) => Some(c),
            _ => None,
        }
    }

    pub fn total(&self) -> Decimal {
        money::checkout_total(&self.lines)
    }

    pub fn item_count(&self) -> u32 {
        money::checkout_count(&self.lines)
    }

    /// Update one form field; ignored once confirmed
    pub fn handle_field_change(&mut self, field: CustomerField, value: &str) {
        if self.state.is_confirmed() {
            tracing::debug!(field = %field, "Edit ignored, order already confirmed");
            return;
        }
        self.customer = apply_field_change(&self.customer, field, value);
        self.state = CheckoutState::Editing;
    }

    /// Select a payment method; disabled methods are refused and the
    /// previous selection is kept
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<(), CheckoutError> {
        if self.state.is_confirmed() {
            return Err(CheckoutError::AlreadyConfirmed);
        }
        if !self.policy.is_enabled(method) {
            tracing::info!(method = method.code(), "Payment method not available");
            return Err(CheckoutError::UnsupportedPaymentMethod(method));
        }
        self.payment_method = method;
        self.state = CheckoutState::Editing;
        Ok(())
    }

    /// Run [`submit_order`] and move the state machine
    pub fn submit(&mut self) -> Result<OrderConfirmation, CheckoutError> {
        if self.state.is_confirmed() {
            return Err(CheckoutError::AlreadyConfirmed);
        }

        match submit_order(
            &self.customer,
            self.payment_method,
            &self.lines,
            &self.policy,
        ) {
            Ok(confirmation) => {
                tracing::info!(
                    reference = %confirmation.reference,
                    payment_method = confirmation.payment_method.code(),
                    items = confirmation.item_count,
                    total = %money::format_money(confirmation.total),
                    "Order confirmed"
                );
                self.state = CheckoutState::Confirmed(confirmation.clone());
                Ok(confirmation)
            }
            Err(error) => {
                tracing::info!(error = %error, "Checkout rejected");
                self.state = CheckoutState::ValidationFailed {
                    error: error.clone(),
                };
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<CheckoutItemInput> {
        vec![
            CheckoutItemInput {
                name: "Biryani".to_string(),
                price: 800.0,
                quantity: Some(2),
            },
            CheckoutItemInput {
                name: "Gulab Jamun".to_string(),
                price: 400.0,
                quantity: None,
            },
        ]
    }

    fn fill(checkout: &mut Checkout, contact: &str) {
        checkout.handle_field_change(CustomerField::Name, "Ayesha Khan");
        checkout.handle_field_change(CustomerField::Address, "12 Mall Road, Lahore");
        checkout.handle_field_change(CustomerField::Contact, contact);
    }

    #[test]
    fn test_new_checkout_normalizes_quantities() {
        let checkout = Checkout::new(&items(), CheckoutPolicy::default());
        assert_eq!(checkout.lines()[1].quantity.get(), 1);
        assert_eq!(checkout.item_count(), 3);
        assert_eq!(checkout.total(), Decimal::new(2000, 0));
        assert_eq!(checkout.state(), &CheckoutState::Editing);
        assert_eq!(checkout.payment_method(), PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_short_contact_rejected_and_form_kept() {
        let mut checkout = Checkout::new(&items(), CheckoutPolicy::default());
        fill(&mut checkout, "12345");
        let before = checkout.customer().clone();

        let err = checkout.submit().unwrap_err();
        assert_eq!(err.field(), Some(CustomerField::Contact));
        assert_eq!(
            err.to_string(),
            "Please enter a valid 10-digit contact number."
        );
        assert_eq!(checkout.customer(), &before);
        assert!(checkout.state().is_editable());
        assert_eq!(checkout.state().error(), Some(&err));
    }

    #[test]
    fn test_edit_after_rejection_returns_to_editing() {
        let mut checkout = Checkout::new(&items(), CheckoutPolicy::default());
        fill(&mut checkout, "12345");
        assert!(checkout.submit().is_err());

        checkout.handle_field_change(CustomerField::Contact, "1234567890");
        assert_eq!(checkout.state(), &CheckoutState::Editing);
    }

    #[test]
    fn test_valid_submit_confirms() {
        let mut checkout = Checkout::new(&items(), CheckoutPolicy::default());
        fill(&mut checkout, "1234567890");

        let confirmation = checkout.submit().unwrap();
        assert_eq!(confirmation.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(
            confirmation.message(),
            "Order confirmed! Payment method: Cash on Delivery"
        );
        assert_eq!(confirmation.item_count, 3);
        assert_eq!(confirmation.total, Decimal::new(2000, 0));
        assert!(checkout.state().is_confirmed());
        assert_eq!(checkout.confirmation(), Some(&confirmation));
    }

    #[test]
    fn test_confirmed_is_terminal() {
        let mut checkout = Checkout::new(&items(), CheckoutPolicy::default());
        fill(&mut checkout, "1234567890");
        checkout.submit().unwrap();

        checkout.handle_field_change(CustomerField::Name, "Someone Else");
        assert_eq!(checkout.customer().name, "Ayesha Khan");
        assert!(checkout.state().is_confirmed());
        assert_eq!(checkout.submit().unwrap_err(), CheckoutError::AlreadyConfirmed);
        assert_eq!(
            checkout.select_payment(PaymentMethod::CashOnDelivery),
            Err(CheckoutError::AlreadyConfirmed)
        );
    }

    #[test]
    fn test_required_fields_checked() {
        let mut checkout = Checkout::new(&items(), CheckoutPolicy::default());
        checkout.handle_field_change(CustomerField::Name, "Ayesha");
        checkout.handle_field_change(CustomerField::Contact, "1234567890");

        let err = checkout.submit().unwrap_err();
        assert_eq!(err.field(), Some(CustomerField::Address));
        assert_eq!(err.to_string(), "Address is required");
    }

    #[test]
    fn test_online_refused_when_disabled() {
        let mut checkout = Checkout::new(&items(), CheckoutPolicy::default());
        assert_eq!(
            checkout.select_payment(PaymentMethod::Online),
            Err(CheckoutError::UnsupportedPaymentMethod(PaymentMethod::Online))
        );
        assert_eq!(checkout.payment_method(), PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_submit_order_rejects_online_defensively() {
        let info = CustomerInfo {
            name: "Ayesha".to_string(),
            address: "Lahore".to_string(),
            contact: "1234567890".to_string(),
        };
        let lines = CheckoutLine::from_inputs(&items());
        let err = submit_order(&info, PaymentMethod::Online, &lines, &CheckoutPolicy::default())
            .unwrap_err();
        assert_eq!(err, CheckoutError::UnsupportedPaymentMethod(PaymentMethod::Online));
    }

    #[test]
    fn test_online_accepted_when_enabled() {
        let policy = CheckoutPolicy {
            online_payment_enabled: true,
            ..CheckoutPolicy::default()
        };
        let mut checkout = Checkout::new(&items(), policy);
        checkout.select_payment(PaymentMethod::Online).unwrap();
        fill(&mut checkout, "1234567890");
        let confirmation = checkout.submit().unwrap();
        assert_eq!(
            confirmation.message(),
            "Order confirmed! Payment method: Online Payment"
        );
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut checkout = Checkout::new(&[], CheckoutPolicy::default());
        fill(&mut checkout, "1234567890");
        assert_eq!(checkout.submit().unwrap_err(), CheckoutError::EmptyCart);
    }
}
