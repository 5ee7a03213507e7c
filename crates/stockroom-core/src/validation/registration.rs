//! Registration form validation.
//!
//! Returns the first failing rule across the whole form, in this order:
//! username, password, confirmation.

use super::{has_letter_and_digit, text_len, trim_input, ValidationResult};
use crate::error::ValidationError;
use crate::types::RegistrationInput;
use crate::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN};

/// Trims a username; a missing one becomes empty.
pub fn sanitize_username(username: Option<&str>) -> String {
    username.map(trim_input).unwrap_or_default().to_string()
}

/// Validates the registration form.
///
/// ## Rules
/// - username (trimmed): required, 3..=50 characters, `[A-Za-z0-9._-]`
/// - password (as typed): present, 6..=100 characters, letter + digit
/// - confirmation: present and equal to the password
///
/// ## Example
/// ```rust
/// use stockroom_core::types::RegistrationInput;
/// use stockroom_core::validation::validate_registration;
///
/// let input = RegistrationInput {
///     username: Some("new.user".into()),
///     password: Some("Secret123".into()),
///     confirm_password: Some("Secret123".into()),
/// };
/// assert!(validate_registration(&input).is_ok());
/// ```
pub fn validate_registration(input: &RegistrationInput) -> ValidationResult<()> {
    let username = sanitize_username(input.username.as_deref());
    if username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }

    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&text_len(&username)) {
        return Err(ValidationError::UsernameLengthOutOfRange {
            min: USERNAME_MIN_LEN,
            max: USERNAME_MAX_LEN,
        });
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(ValidationError::UsernameDisallowedCharacters);
    }

    let password = input
        .password
        .as_deref()
        .ok_or(ValidationError::PasswordMissing)?;

    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&text_len(password)) {
        return Err(ValidationError::PasswordLengthOutOfRange {
            min: PASSWORD_MIN_LEN,
            max: PASSWORD_MAX_LEN,
        });
    }

    if !has_letter_and_digit(password) {
        return Err(ValidationError::PasswordNeedsLetterAndDigit);
    }

    if input.confirm_password.as_deref() != Some(password) {
        return Err(ValidationError::PasswordConfirmationMismatch);
    }

    Ok(())
}
