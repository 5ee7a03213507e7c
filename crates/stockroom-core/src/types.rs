//! # Domain Types
//!
//! Input and transfer types shared by the login and product screens.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Form input (raw, untrusted)         Backend shapes (typed)             │
//! │  ───────────────────────────         ──────────────────────             │
//! │  LoginCredentials                    ProductDto      (GET response)     │
//! │  RegistrationInput                   ProductPayload  (POST/PUT body)    │
//! │  ProductInput   ──validate──►                                           │
//! │  ProductDraft   ──validate/normalise──► ProductPayload                  │
//! │       ▲                                                                 │
//! │       └── NumericInput: number | string, coerced explicitly            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::validation::trim_input;

/// Status assigned to products that do not carry one.
pub const DEFAULT_PRODUCT_STATUS: &str = "ACTIVE";

// =============================================================================
// Numeric Input
// =============================================================================

/// A numeric form field as it arrives from an `<input>`: a number, the text
/// the user typed, or an explicit `null`.
///
/// ## Coercion
/// Follows the browser's `Number(value)`:
/// - `Number(n)` is taken as-is
/// - `Null` is `0`
/// - `Text(s)` is trimmed; whitespace-only text is `0`
/// - text must otherwise be a decimal literal (`12`, `-1.5`, `.5`, `2e3`),
///   `Infinity` with an optional sign, or a `0x`/`0o`/`0b` integer
/// - anything else (or NaN) is "not numeric"
///
/// Emptiness (`""`) is checked by the validators *before* coercion, since
/// an empty field and a zero have different messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Null,
}

impl NumericInput {
    /// Returns true for the empty string and for `Null`.
    pub fn is_missing(&self) -> bool {
        match self {
            NumericInput::Text(s) => s.is_empty(),
            NumericInput::Null => true,
            NumericInput::Number(_) => false,
        }
    }

    /// Coerces the value to a number, or `None` when it is not numeric.
    ///
    /// ```rust
    /// use stockroom_core::NumericInput;
    ///
    /// assert_eq!(NumericInput::Text(" 1500 ".into()).coerce(), Some(1500.0));
    /// assert_eq!(NumericInput::Text("0x10".into()).coerce(), Some(16.0));
    /// assert_eq!(NumericInput::Text("abc".into()).coerce(), None);
    /// assert_eq!(NumericInput::Text("inf".into()).coerce(), None);
    /// assert_eq!(NumericInput::Number(10.5).coerce(), Some(10.5));
    /// ```
    pub fn coerce(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Null => 0.0,
            NumericInput::Text(s) => parse_number_text(s)?,
        };

        if value.is_nan() {
            None
        } else {
            Some(value)
        }
    }
}

fn parse_number_text(text: &str) -> Option<f64> {
    let s = trim_input(text);
    if s.is_empty() {
        return Some(0.0);
    }

    let radix = match s.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&s[2..], radix);
    }

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else if is_decimal_literal(unsigned) {
        unsigned.parse::<f64>().ok()?
    } else {
        return None;
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// `digits [. digits] [e [+-] digits]`, with at least one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok = all_digits(whole)
        && all_digits(fraction)
        && !(whole.is_empty() && fraction.is_empty());

    let exponent_ok = exponent.map_or(true, |e| {
        let e = e.strip_prefix(['+', '-']).unwrap_or(e);
        !e.is_empty() && all_digits(e)
    });

    mantissa_ok && exponent_ok
}

/// Keeps an explicit `null` as [`NumericInput::Null`]; only an absent field
/// is `None`.
fn null_is_a_value<'de, D>(deserializer: D) -> Result<Option<NumericInput>, D::Error>
where
    D: Deserializer<'de>,
{
    NumericInput::deserialize(deserializer).map(Some)
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

impl From<i64> for NumericInput {
    fn from(n: i64) -> Self {
        NumericInput::Number(n as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

// =============================================================================
// Login / Registration Input
// =============================================================================

/// Username and password as typed into the login form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Registration form input.
///
/// Fields are optional because the form may submit without them; a missing
/// password or confirmation has its own message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

// =============================================================================
// Product Form Input
// =============================================================================

/// The product create/edit form, validated field by field.
///
/// `None` stands for a null or absent field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductInput {
    pub name: Option<String>,
    pub price: Option<NumericInput>,
    pub quantity: Option<NumericInput>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Field names of [`ProductInput`], used as keys of the error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Name,
    Price,
    Quantity,
    Description,
    Category,
}

// =============================================================================
// Backend Shapes
// =============================================================================

/// A product as returned by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// UUID assigned by the backend.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i64,
    pub status: Option<String>,
}

/// A partially filled product (add form, inline edit form).
///
/// A JSON `null` price or stock is kept as [`NumericInput::Null`] (which
/// coerces to `0`); only an absent field is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_is_a_value")]
    pub price: Option<NumericInput>,
    #[serde(default, deserialize_with = "null_is_a_value")]
    pub stock_quantity: Option<NumericInput>,
    pub status: Option<String>,
}

impl From<&ProductDto> for ProductDraft {
    fn from(p: &ProductDto) -> Self {
        ProductDraft {
            name: Some(p.name.clone()),
            description: p.description.clone(),
            price: Some(NumericInput::Number(p.price)),
            stock_quantity: Some(NumericInput::from(p.stock_quantity)),
            status: p.status.clone(),
        }
    }
}

impl From<&ProductPayload> for ProductDraft {
    fn from(p: &ProductPayload) -> Self {
        ProductDraft {
            name: Some(p.name.clone()),
            description: Some(p.description.clone()),
            price: Some(NumericInput::Number(p.price)),
            stock_quantity: Some(NumericInput::Number(p.stock_quantity)),
            status: Some(p.status.clone()),
        }
    }
}

/// Request body for create (`POST`) and update (`PUT`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: f64,
    pub status: String,
}

impl ProductPayload {
    /// The blank add-form payload.
    pub fn empty() -> Self {
        ProductPayload {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            stock_quantity: 0.0,
            status: DEFAULT_PRODUCT_STATUS.to_string(),
        }
    }

    /// Normalises a draft for transport.
    ///
    /// ## Rules
    /// - name is trimmed, missing name becomes `""`
    /// - missing description becomes `""`
    /// - price and stock are coerced; non-numeric or missing become `0`
    /// - missing status becomes `"ACTIVE"`
    ///
    /// ```rust
    /// use stockroom_core::{ProductDraft, ProductPayload};
    ///
    /// let draft = ProductDraft {
    ///     name: Some("  Laptop  ".into()),
    ///     price: Some("1000".into()),
    ///     ..Default::default()
    /// };
    /// let payload = ProductPayload::from_draft(&draft);
    /// assert_eq!(payload.name, "Laptop");
    /// assert_eq!(payload.price, 1000.0);
    /// assert_eq!(payload.status, "ACTIVE");
    /// ```
    pub fn from_draft(draft: &ProductDraft) -> Self {
        let number = |value: &Option<NumericInput>| {
            value
                .as_ref()
                .and_then(NumericInput::coerce)
                .unwrap_or(0.0)
        };

        ProductPayload {
            name: trim_input(draft.name.as_deref().unwrap_or_default()).to_string(),
            description: draft.description.clone().unwrap_or_default(),
            price: number(&draft.price),
            stock_quantity: number(&draft.stock_quantity),
            status: draft
                .status
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_PRODUCT_STATUS)
                .to_string(),
        }
    }
}

impl Default for ProductPayload {
    fn default() -> Self {
        ProductPayload::empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
