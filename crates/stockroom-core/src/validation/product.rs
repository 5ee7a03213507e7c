//! # Product Form Validation
//!
//! Field-by-field checks for the product create/edit form.
//!
//! ## Field Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field        Rules (first failure wins)                               │
//! │  ───────────  ──────────────────────────────────────────────────────   │
//! │  name         required → ≥ 3 chars → ≤ 100 chars                       │
//! │  price        required → numeric → > 0 → ≤ 999,999,999                 │
//! │  quantity     required → integer → ≥ 0 → ≤ 99,999                      │
//! │  description  optional → ≤ 500 chars                                   │
//! │  category     required                                                 │
//! │                                                                         │
//! │  Every field is checked; one failing field never hides another.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use super::{text_len, ValidationResult};
use crate::error::ValidationError;
use crate::types::{NumericInput, ProductField, ProductInput};
use crate::{
    MAX_DESCRIPTION_LEN, MAX_PRICE, MAX_PRODUCT_NAME_LEN, MAX_QUANTITY, MIN_PRODUCT_NAME_LEN,
};

/// Field → message map returned by [`validate_product`].
///
/// A field that passes has no entry. The map is empty if and only if the
/// product is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ProductValidationErrors(
    #[ts(type = "Partial<Record<\"name\" | \"price\" | \"quantity\" | \"description\" | \"category\", string>>")]
    BTreeMap<ProductField, ValidationError>,
);

impl ProductValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ProductField) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// The message for `field`, if it failed.
    pub fn message(&self, field: ProductField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductField, &ValidationError)> {
        self.0.iter()
    }

    fn record(&mut self, field: ProductField, error: Option<ValidationError>) {
        if let Some(error) = error {
            self.0.insert(field, error);
        }
    }
}

/// Validates a product form.
///
/// ## Example
/// ```rust
/// use stockroom_core::types::{ProductField, ProductInput};
/// use stockroom_core::validation::validate_product;
///
/// let product = ProductInput {
///     name: Some("Laptop Dell".into()),
///     price: Some(15_000_000i64.into()),
///     quantity: Some(10i64.into()),
///     description: None,
///     category: Some("Electronics".into()),
/// };
/// assert!(validate_product(&product).is_empty());
///
/// let product = ProductInput { name: Some("aa".into()), ..product };
/// assert_eq!(
///     validate_product(&product).message(ProductField::Name).as_deref(),
///     Some("Tên sản phẩm phải có ít nhất 3 ký tự")
/// );
/// ```
pub fn validate_product(product: &ProductInput) -> ProductValidationErrors {
    let mut errors = ProductValidationErrors::default();

    errors.record(ProductField::Name, check_name(product.name.as_deref()));
    errors.record(ProductField::Price, check_price(product.price.as_ref()));
    errors.record(
        ProductField::Quantity,
        check_quantity(product.quantity.as_ref()),
    );
    errors.record(
        ProductField::Description,
        check_description(product.description.as_deref()),
    );
    errors.record(
        ProductField::Category,
        check_category(product.category.as_deref()),
    );

    errors
}

fn check_name(name: Option<&str>) -> Option<ValidationError> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Some(ValidationError::ProductNameRequired),
    };

    let len = text_len(name);
    if len < MIN_PRODUCT_NAME_LEN {
        return Some(ValidationError::ProductNameTooShort {
            min: MIN_PRODUCT_NAME_LEN,
        });
    }

    if len > MAX_PRODUCT_NAME_LEN {
        return Some(ValidationError::ProductNameTooLong {
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    None
}

fn check_price(price: Option<&NumericInput>) -> Option<ValidationError> {
    let price = match price {
        Some(price) if !price.is_missing() => price,
        _ => return Some(ValidationError::PriceRequired),
    };

    let Some(value) = price.coerce() else {
        return Some(ValidationError::PriceNotNumeric);
    };

    if value <= 0.0 {
        return Some(ValidationError::PriceNotPositive);
    }

    if value > MAX_PRICE {
        return Some(ValidationError::PriceTooLarge);
    }

    None
}

fn check_quantity(quantity: Option<&NumericInput>) -> Option<ValidationError> {
    let quantity = match quantity {
        Some(quantity) if !quantity.is_missing() => quantity,
        _ => return Some(ValidationError::QuantityRequired),
    };

    let value = match quantity.coerce() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => value,
        _ => return Some(ValidationError::QuantityNotInteger),
    };

    if value < 0.0 {
        return Some(ValidationError::QuantityNegative);
    }

    if value > MAX_QUANTITY {
        return Some(ValidationError::QuantityTooLarge);
    }

    None
}

fn check_description(description: Option<&str>) -> Option<ValidationError> {
    match description {
        Some(d) if text_len(d) > MAX_DESCRIPTION_LEN => Some(ValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
        }),
        _ => None,
    }
}

fn check_category(category: Option<&str>) -> Option<ValidationError> {
    match category {
        Some(c) if !c.is_empty() => None,
        _ => Some(ValidationError::CategoryRequired),
    }
}

/// Validates a product id string.
///
/// ## Rules
/// - Must not be blank
/// - Must parse as a UUID
///
/// ```rust
/// use stockroom_core::validation::validate_product_id;
///
/// assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_product_id("not-a-uuid").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_product() -> ProductInput {
        ProductInput {
            name: Some("Laptop Dell".to_string()),
            price: Some(NumericInput::Number(15_000_000.0)),
            quantity: Some(NumericInput::Number(10.0)),
            description: Some("Hàng chính hãng".to_string()),
            category: Some("Electronics".to_string()),
        }
    }

    fn with_price(price: Option<NumericInput>) -> Option<String> {
        let product = ProductInput {
            price,
            ..valid_product()
        };
        validate_product(&product).message(ProductField::Price)
    }

    fn with_quantity(quantity: Option<NumericInput>) -> Option<String> {
        let product = ProductInput {
            quantity,
            ..valid_product()
        };
        validate_product(&product).message(ProductField::Quantity)
    }

    #[test]
    fn test_valid_product_has_no_errors() {
        assert!(validate_product(&valid_product()).is_empty());

        let no_description = ProductInput {
            description: None,
            ..valid_product()
        };
        assert!(validate_product(&no_description).is_empty());
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let product = ProductInput {
            name: Some("aa".to_string()),
            price: Some(NumericInput::Number(0.0)),
            quantity: Some(NumericInput::Number(-1.0)),
            description: None,
            category: Some(String::new()),
        };
        let errors = validate_product(&product);

        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.message(ProductField::Name).as_deref(),
            Some("Tên sản phẩm phải có ít nhất 3 ký tự")
        );
        assert_eq!(
            errors.message(ProductField::Price).as_deref(),
            Some("Giá sản phẩm phải lớn hơn 0")
        );
        assert_eq!(
            errors.message(ProductField::Quantity).as_deref(),
            Some("Số lượng không được âm")
        );
        assert_eq!(
            errors.message(ProductField::Category).as_deref(),
            Some("Danh mục không được để trống")
        );
        assert!(errors.get(ProductField::Description).is_none());
    }

    #[rstest]
    #[case(None, Some("Tên sản phẩm không được để trống"))]
    #[case(Some(""), Some("Tên sản phẩm không được để trống"))]
    #[case(Some("aa"), Some("Tên sản phẩm phải có ít nhất 3 ký tự"))]
    #[case(Some("abc"), None)]
    #[case(Some("😀"), Some("Tên sản phẩm phải có ít nhất 3 ký tự"))]
    #[case(Some("😀a"), None)]
    fn test_name_rules(#[case] name: Option<&str>, #[case] expected: Option<&str>) {
        let product = ProductInput {
            name: name.map(str::to_string),
            ..valid_product()
        };
        assert_eq!(
            validate_product(&product).message(ProductField::Name).as_deref(),
            expected
        );
    }

    #[test]
    fn test_name_length_boundaries() {
        let at_limit = ProductInput {
            name: Some("a".repeat(100)),
            ..valid_product()
        };
        assert!(validate_product(&at_limit).is_empty());

        let over_limit = ProductInput {
            name: Some("a".repeat(101)),
            ..valid_product()
        };
        assert_eq!(
            validate_product(&over_limit)
                .message(ProductField::Name)
                .as_deref(),
            Some("Tên sản phẩm không được vượt quá 100 ký tự")
        );
    }

    #[rstest]
    #[case(None, Some("Giá sản phẩm không được để trống"))]
    #[case(Some(NumericInput::Text(String::new())), Some("Giá sản phẩm không được để trống"))]
    #[case(Some(NumericInput::Text("abc".into())), Some("Giá sản phẩm phải là một con số"))]
    #[case(Some(NumericInput::Number(0.0)), Some("Giá sản phẩm phải lớn hơn 0"))]
    #[case(Some(NumericInput::Number(-5000.0)), Some("Giá sản phẩm phải lớn hơn 0"))]
    #[case(Some(NumericInput::Text("  ".into())), Some("Giá sản phẩm phải lớn hơn 0"))]
    #[case(Some(NumericInput::Number(999_999_999.0)), None)]
    #[case(Some(NumericInput::Number(1_000_000_000.0)), Some("Giá sản phẩm không được vượt quá 999,999,999"))]
    #[case(Some(NumericInput::Text("1500.50".into())), None)]
    #[case(Some(NumericInput::Null), Some("Giá sản phẩm không được để trống"))]
    #[case(Some(NumericInput::Text("inf".into())), Some("Giá sản phẩm phải là một con số"))]
    #[case(Some(NumericInput::Text("infinity".into())), Some("Giá sản phẩm phải là một con số"))]
    #[case(Some(NumericInput::Text("Infinity".into())), Some("Giá sản phẩm không được vượt quá 999,999,999"))]
    #[case(Some(NumericInput::Text("0x10".into())), None)]
    fn test_price_rules(#[case] price: Option<NumericInput>, #[case] expected: Option<&str>) {
        assert_eq!(with_price(price).as_deref(), expected);
    }

    #[rstest]
    #[case(None, Some("Số lượng không được để trống"))]
    #[case(Some(NumericInput::Text(String::new())), Some("Số lượng không được để trống"))]
    #[case(Some(NumericInput::Text("xyz".into())), Some("Số lượng phải là số nguyên"))]
    #[case(Some(NumericInput::Number(10.5)), Some("Số lượng phải là số nguyên"))]
    #[case(Some(NumericInput::Number(-1.0)), Some("Số lượng không được âm"))]
    #[case(Some(NumericInput::Number(0.0)), None)]
    #[case(Some(NumericInput::Number(99_999.0)), None)]
    #[case(Some(NumericInput::Number(100_000.0)), Some("Số lượng không được vượt quá 99,999"))]
    #[case(Some(NumericInput::Text("42".into())), None)]
    #[case(Some(NumericInput::Text("inf".into())), Some("Số lượng phải là số nguyên"))]
    #[case(Some(NumericInput::Text("Infinity".into())), Some("Số lượng phải là số nguyên"))]
    #[case(Some(NumericInput::Text("0x10".into())), None)]
    fn test_quantity_rules(
        #[case] quantity: Option<NumericInput>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(with_quantity(quantity).as_deref(), expected);
    }

    #[test]
    fn test_infinite_quantity_is_not_an_integer() {
        assert_eq!(
            with_quantity(Some(NumericInput::Number(f64::INFINITY))).as_deref(),
            Some("Số lượng phải là số nguyên")
        );
    }

    #[test]
    fn test_description_length() {
        let at_limit = ProductInput {
            description: Some("a".repeat(500)),
            ..valid_product()
        };
        assert!(validate_product(&at_limit).is_empty());

        let over_limit = ProductInput {
            description: Some("a".repeat(501)),
            ..valid_product()
        };
        assert_eq!(
            validate_product(&over_limit)
                .message(ProductField::Description)
                .as_deref(),
            Some("Mô tả không được vượt quá 500 ký tự")
        );
    }

    #[test]
    fn test_serialized_error_map() {
        let product = ProductInput {
            category: None,
            ..valid_product()
        };
        let json = serde_json::to_value(validate_product(&product)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "category": "Danh mục không được để trống" })
        );

        let json = serde_json::to_value(validate_product(&valid_product())).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_deserialized_form_input() {
        let json = r#"{ "name": "Laptop Dell", "price": "15000000", "quantity": 10, "category": "Electronics" }"#;
        let product: ProductInput = serde_json::from_str(json).unwrap();
        assert!(validate_product(&product).is_empty());

        let json = r#"{ "name": null, "price": null, "quantity": "", "category": "" }"#;
        let product: ProductInput = serde_json::from_str(json).unwrap();
        assert_eq!(validate_product(&product).len(), 4);
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("123").is_err());
    }
}
