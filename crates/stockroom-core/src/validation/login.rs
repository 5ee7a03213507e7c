//! # Login Form Validation
//!
//! Per-field checks for the username/password pair on the login screen.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Login Screen                                                           │
//! │                                                                         │
//! │  User clicks "Đăng nhập"                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_login_form(username, password) ← THIS MODULE                 │
//! │       │                                                                 │
//! │       ├── any error? → show message under the field, stop              │
//! │       │                                                                 │
//! │       └── none → POST /api/auth/login                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use super::{has_letter_and_digit, text_len, trim_input};
use crate::error::ValidationError;
use crate::types::LoginCredentials;
use crate::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN};

/// Outcome of [`validate_login_form`].
///
/// Each field is checked independently: a password error never hides a
/// username error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoginValidationResult {
    #[ts(type = "string | null")]
    pub username_error: Option<ValidationError>,
    #[ts(type = "string | null")]
    pub password_error: Option<ValidationError>,
}

impl LoginValidationResult {
    /// True when neither field has an error.
    pub fn is_valid(&self) -> bool {
        self.username_error.is_none() && self.password_error.is_none()
    }
}

/// Validates the login form.
///
/// Both values are trimmed before any rule runs.
///
/// ## Rules (first failure wins, per field)
/// - username: empty, then `^[A-Za-z0-9_]+$`
/// - password: empty, then 6..=100 characters, then letter + digit
///
/// ```rust
/// use stockroom_core::validation::validate_login_form;
///
/// let result = validate_login_form("  user123  ", "  Test1234  ");
/// assert!(result.is_valid());
///
/// let result = validate_login_form("user name", "Test1234");
/// assert_eq!(
///     result.username_error.unwrap().to_string(),
///     "tên đăng nhập không hợp lệ"
/// );
/// ```
pub fn validate_login_form(username: &str, password: &str) -> LoginValidationResult {
    LoginValidationResult {
        username_error: check_username(trim_input(username)),
        password_error: check_password(trim_input(password)),
    }
}

impl LoginCredentials {
    /// Runs [`validate_login_form`] on this pair.
    pub fn validate(&self) -> LoginValidationResult {
        validate_login_form(&self.username, &self.password)
    }
}

fn check_username(username: &str) -> Option<ValidationError> {
    if username.is_empty() {
        return Some(ValidationError::UsernameRequired);
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Some(ValidationError::UsernameInvalid);
    }

    None
}

fn check_password(password: &str) -> Option<ValidationError> {
    if password.is_empty() {
        return Some(ValidationError::PasswordRequired);
    }

    let len = text_len(password);
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Some(ValidationError::PasswordLengthOutOfRange {
            min: PASSWORD_MIN_LEN,
            max: PASSWORD_MAX_LEN,
        });
    }

    if !has_letter_and_digit(password) {
        return Some(ValidationError::PasswordNeedsLetterAndDigit);
    }

    None
}

// =============================================================================
// Unit Tests
// =============================================================================
