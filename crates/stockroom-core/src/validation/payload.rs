//! Pre-submission check for product payloads.
//!
//! Looser than [`validate_product`](super::validate_product): zero is an
//! accepted price, there is no upper bound, and only the first failure is
//! reported. The product list runs this right before a create request.

use super::{trim_input, ValidationResult};
use crate::error::ValidationError;
use crate::types::{NumericInput, ProductDraft};

/// Validates a product draft before it is sent to the backend.
///
/// ## Rules
/// - name present and not blank after trimming
/// - price numeric and `>= 0` (absent is not numeric, `null` is `0`)
/// - stock quantity numeric and `>= 0` (same)
///
/// ```rust
/// use stockroom_core::types::ProductDraft;
/// use stockroom_core::validation::validate_product_payload;
///
/// let draft = ProductDraft {
///     name: Some("Valid".into()),
///     price: Some(100i64.into()),
///     stock_quantity: Some(10i64.into()),
///     ..Default::default()
/// };
/// assert!(validate_product_payload(&draft).is_ok());
/// ```
pub fn validate_product_payload(draft: &ProductDraft) -> ValidationResult<()> {
    if draft.name.as_deref().map_or(true, |n| trim_input(n).is_empty()) {
        return Err(ValidationError::ProductNameRequired);
    }

    if !is_non_negative(draft.price.as_ref()) {
        return Err(ValidationError::PayloadPriceInvalid);
    }

    if !is_non_negative(draft.stock_quantity.as_ref()) {
        return Err(ValidationError::PayloadQuantityInvalid);
    }

    Ok(())
}

fn is_non_negative(value: Option<&NumericInput>) -> bool {
    value
        .and_then(NumericInput::coerce)
        .is_some_and(|n| n >= 0.0)
}
