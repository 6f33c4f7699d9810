//! Checkout form updates
//!
//! Patch semantics: exactly one field changes, the others keep their values.

use shared::{CustomerField, CustomerInfo, models::UnknownField};

/// Return a copy of `info` with one field replaced
pub fn apply_field_change(info: &CustomerInfo, field: CustomerField, value: &str) -> CustomerInfo {
    let mut next = info.clone();
    match field {
        CustomerField::Name => next.name = value.to_string(),
        CustomerField::Address => next.address = value.to_string(),
        CustomerField::Contact => next.contact = value.to_string(),
    }
    next
}

/// Same as [`apply_field_change`], resolving the field by its form key
pub fn apply_named_field_change(
    info: &CustomerInfo,
    field_name: &str,
    value: &str,
) -> Result<CustomerInfo, UnknownField> {
    let field: CustomerField = field_name.parse()?;
    Ok(apply_field_change(info, field, value))
}
