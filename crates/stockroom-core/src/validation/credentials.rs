//! Username and password strength rules.
//!
//! These are stricter than the login form rules (no underscore, bounded
//! username length) and report length failures with separate messages.
//! Input is checked as given, without trimming.

use super::{has_letter_and_digit, text_len, ValidationResult};
use crate::error::ValidationError;
use crate::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN};

/// Validates a username against the strength rules.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 3 and 50 characters
/// - Must contain only ASCII letters and digits
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_username;
///
/// assert!(validate_username("user123").is_ok());
/// assert!(validate_username("ab").is_err());
/// assert!(validate_username("user!").is_err());
/// ```
pub fn validate_username(username: &str) -> ValidationResult<()> {
    if username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }

    let len = text_len(username);
    if len < USERNAME_MIN_LEN {
        return Err(ValidationError::UsernameTooShort {
            min: USERNAME_MIN_LEN,
        });
    }

    if len > USERNAME_MAX_LEN {
        return Err(ValidationError::UsernameTooLong {
            max: USERNAME_MAX_LEN,
        });
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::UsernameNotAlphanumeric);
    }

    Ok(())
}

/// Validates a password against the strength rules.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 6 and 100 characters
/// - Must contain at least one letter and one digit
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::PasswordEmpty);
    }

    let len = text_len(password);
    if len < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: PASSWORD_MIN_LEN,
        });
    }

    if len > PASSWORD_MAX_LEN {
        return Err(ValidationError::PasswordTooLong {
            max: PASSWORD_MAX_LEN,
        });
    }

    if !has_letter_and_digit(password) {
        return Err(ValidationError::PasswordNeedsLetterAndDigit);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
