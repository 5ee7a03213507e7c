//! # Validation Module
//!
//! Form validation for the login, registration and product screens.
//!
//! ## Rule Sets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Rule Sets                               │
//! │                                                                         │
//! │  login         validate_login_form()      per-field, trims, allows '_' │
//! │  credentials   validate_username()        strict alnum, 3..=50         │
//! │                validate_password()        6..=100, letter + digit      │
//! │  registration  validate_registration()    allows '.', '-', '_', confirm│
//! │  product       validate_product()         per-field error map          │
//! │  payload       validate_product_payload() single error, pre-submit     │
//! │                                                                         │
//! │  Username rules differ between sets. Each screen keeps its own set    │
//! │  and they are never merged.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All validators are pure: same input, same output, no I/O.

pub mod credentials;
pub mod login;
pub mod payload;
pub mod product;
pub mod registration;

pub use credentials::{validate_password, validate_username};
pub use login::{validate_login_form, LoginValidationResult};
pub use payload::validate_product_payload;
pub use product::{validate_product, validate_product_id, ProductValidationErrors};
pub use registration::{sanitize_username, validate_registration};

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationError;

/// Result type for single-error validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// `{ valid, error? }` form of a single-error check, as the screens render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Verdict {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | undefined")]
    pub error: Option<ValidationError>,
}

impl From<ValidationResult<()>> for Verdict {
    fn from(result: ValidationResult<()>) -> Self {
        match result {
            Ok(()) => Verdict {
                valid: true,
                error: None,
            },
            Err(error) => Verdict {
                valid: false,
                error: Some(error),
            },
        }
    }
}

/// Length in UTF-16 code units, the unit the browser form counts in.
///
/// Vietnamese letters count once; characters outside the BMP (emoji) count
/// twice.
pub(crate) fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Whitespace as browser `trim()` and `Number()` see it: Unicode white
/// space plus the byte-order mark, minus NEL (U+0085).
pub(crate) fn is_form_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Trims leading and trailing [`is_form_space`] characters.
pub(crate) fn trim_input(s: &str) -> &str {
    s.trim_matches(is_form_space)
}

/// At least one ASCII letter and at least one ASCII digit.
pub(crate) fn has_letter_and_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic()) && s.chars().any(|c| c.is_ascii_digit())
}
