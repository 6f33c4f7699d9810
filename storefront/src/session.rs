//! 会话 - 一次页面生命周期内的全部状态
//!
//! Wires the catalog/cart side to checkout. Data only flows one way: the
//! cart is snapshotted into a [`Checkout`] when checkout starts, and later
//! cart edits never reach that snapshot. A confirmed checkout clears the
//! cart; [`Storefront::start_new_order`] drops the finished checkout.

use crate::cart::CartManager;
use crate::catalog::Catalog;
use crate::checkout::{Checkout, CheckoutError, CheckoutPolicy, ContactRule};
use crate::core::Config;
use crate::feedback::{FeedbackExpired, FeedbackNotice, ITEM_ADDED_MESSAGE};
use shared::{
    AppError, AppResult, Cart, CheckoutLine, CustomerField, ErrorCode, OrderConfirmation,
    PaymentMethod,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Which section the customer is looking at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Menu,
    Cart,
    Checkout,
}

pub struct Storefront {
    catalog: Catalog,
    cart: CartManager,
    feedback: FeedbackNotice,
    checkout: Option<Checkout>,
    policy: CheckoutPolicy,
    view: View,
}

impl Storefront {
    /// New session with an empty cart
    ///
    /// Feedback expiries are delivered on `feedback_tx`; the owner feeds
    /// them back through [`Storefront::on_feedback_expired`].
    pub fn new(
        catalog: Catalog,
        policy: CheckoutPolicy,
        feedback_delay: Duration,
        feedback_tx: mpsc::UnboundedSender<FeedbackExpired>,
    ) -> Self {
        Self {
            catalog,
            cart: CartManager::new(),
            feedback: FeedbackNotice::new(feedback_delay, feedback_tx),
            checkout: None,
            policy,
            view: View::Menu,
        }
    }

    pub fn from_config(
        config: &Config,
        catalog: Catalog,
        feedback_tx: mpsc::UnboundedSender<FeedbackExpired>,
    ) -> Self {
        let policy = CheckoutPolicy {
            contact: ContactRule::new(config.contact_digits),
            online_payment_enabled: config.online_payment_enabled,
        };
        Self::new(catalog, policy, config.feedback_delay(), feedback_tx)
    }

    // ========== 读取 ==========

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn cart_manager(&self) -> &CartManager {
        &self.cart
    }

    pub fn checkout(&self) -> Option<&Checkout> {
        self.checkout.as_ref()
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.message()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }

    // ========== 菜单 / 购物车 ==========

    /// Add one unit of a menu item and flash the feedback notice
    pub fn add_item(&mut self, name: &str) -> AppResult<&Cart> {
        let entry = self
            .catalog
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("name", name))?;
        self.cart.add_item(&entry);
        self.feedback.show(ITEM_ADDED_MESSAGE);
        Ok(self.cart.cart())
    }

    /// Remove one unit; unknown names are a no-op
    pub fn remove_item(&mut self, name: &str) -> &Cart {
        self.cart.remove_item(name)
    }

    pub fn on_feedback_expired(&mut self, event: FeedbackExpired) -> bool {
        self.feedback.expire(event)
    }

    pub fn show_view(&mut self, view: View) {
        if view == View::Checkout && self.checkout.is_none() {
            tracing::debug!("No checkout in progress, staying on {:?}", self.view);
            return;
        }
        self.view = view;
    }

    // ========== 结账 ==========

    /// Snapshot the cart into a checkout
    ///
    /// An open checkout whose lines still match the cart is resumed with its
    /// form intact. Otherwise the form restarts with the current cart.
    pub fn proceed_to_checkout(&mut self) -> AppResult<&Checkout> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }
        let snapshot = self.cart.checkout_snapshot();

        let resumable = self.checkout.as_ref().is_some_and(|open| {
            !open.state().is_confirmed()
                && open.lines() == CheckoutLine::from_inputs(&snapshot).as_slice()
        });
        if resumable {
            tracing::debug!("Resuming open checkout");
            self.view = View::Checkout;
            return Ok(self.checkout.as_ref().expect("checked above"));
        }

        let checkout = Checkout::new(&snapshot, self.policy);
        tracing::info!(
            items = checkout.item_count(),
            total = %crate::money::format_money(checkout.total()),
            "Checkout started"
        );
        self.view = View::Checkout;
        let checkout = self.checkout.insert(checkout);
        Ok(&*checkout)
    }

    pub fn handle_field_change(&mut self, field: CustomerField, value: &str) -> AppResult<()> {
        self.checkout_mut()?.handle_field_change(field, value);
        Ok(())
    }

    pub fn select_payment(&mut self, method: PaymentMethod) -> AppResult<()> {
        self.checkout_mut()?
            .select_payment(method)
            .map_err(AppError::from)
    }

    /// Submit the checkout form; a confirmation clears the cart
    pub fn submit_order(&mut self) -> AppResult<OrderConfirmation> {
        let confirmation = self.checkout_mut()?.submit()?;
        self.cart.clear();
        self.feedback.dismiss();
        Ok(confirmation)
    }

    /// Leave a confirmed checkout and go back to the menu
    pub fn start_new_order(&mut self) {
        if let Some(checkout) = &self.checkout
            && !checkout.state().is_confirmed()
        {
            tracing::debug!("Checkout still open, keeping it");
            self.view = View::Menu;
            return;
        }
        self.checkout = None;
        self.view = View::Menu;
    }

    fn checkout_mut(&mut self) -> AppResult<&mut Checkout> {
        self.checkout
            .as_mut()
            .ok_or_else(|| AppError::new(ErrorCode::CheckoutNotStarted))
    }
}
