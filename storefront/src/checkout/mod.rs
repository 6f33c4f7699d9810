//! 结账
//!
//! - [`Checkout`] - 结账表单状态机 (Editing / ValidationFailed / Confirmed)
//! - [`ContactRule`] - 联系电话校验
//! - [`submit_order`] - 纯函数式下单校验

mod error;
mod form;
mod state;
mod validator;

pub use error::CheckoutError;
pub use form::{apply_field_change, apply_named_field_change};
pub use state::{Checkout, CheckoutPolicy, CheckoutState, submit_order};
pub use validator::{ContactRule, DEFAULT_CONTACT_DIGITS};
