//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── ValidationError  - A single failed form rule                      │
//! │  └── CoreError        - List-editor misuse + wrapped validation        │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - IO, JSON parsing, configuration                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr / exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Contract
//! The `Display` output of every [`ValidationError`] variant is the exact
//! string shown to the user. The web forms and their tests compare these
//! strings literally, so they must never be reworded.

use serde::{Serialize, Serializer};
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single failed validation rule.
///
/// Validators never return this through `Err` on their own account; the
/// form-level results (login, product) carry at most one per field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // -------------------------------------------------------------------------
    // Username
    // -------------------------------------------------------------------------
    /// Username is empty (after trimming, where the rule set trims).
    #[error("Tên đăng nhập không được để trống")]
    UsernameRequired,

    /// Login form: username has characters outside `[A-Za-z0-9_]`.
    #[error("tên đăng nhập không hợp lệ")]
    UsernameInvalid,

    #[error("Tên đăng nhập phải có ít nhất {min} ký tự")]
    UsernameTooShort { min: usize },

    #[error("Tên đăng nhập không được vượt quá {max} ký tự")]
    UsernameTooLong { max: usize },

    /// Strength rules: username has characters outside `[A-Za-z0-9]`.
    #[error("Tên đăng nhập chỉ được chứa chữ cái và số")]
    UsernameNotAlphanumeric,

    #[error("Tên đăng nhập phải từ {min} đến {max} ký tự")]
    UsernameLengthOutOfRange { min: usize, max: usize },

    /// Registration: username has characters outside `[A-Za-z0-9._-]`.
    #[error("Tên đăng nhập chỉ được chứa chữ, số, '-', '.' và '_'")]
    UsernameDisallowedCharacters,

    // -------------------------------------------------------------------------
    // Password
    // -------------------------------------------------------------------------
    /// Login form: password is empty after trimming.
    #[error("Mật khẩu là bắt buộc")]
    PasswordRequired,

    /// Strength rules: password is empty.
    #[error("Mật khẩu không được để trống")]
    PasswordEmpty,

    /// Registration: password was not supplied at all.
    #[error("Mật khẩu không hợp lệ")]
    PasswordMissing,

    #[error("Mật khẩu phải có ít nhất {min} ký tự")]
    PasswordTooShort { min: usize },

    #[error("Mật khẩu không được vượt quá {max} ký tự")]
    PasswordTooLong { max: usize },

    #[error("Mật khẩu phải từ {min} đến {max} ký tự")]
    PasswordLengthOutOfRange { min: usize, max: usize },

    #[error("Mật khẩu phải chứa cả chữ và số")]
    PasswordNeedsLetterAndDigit,

    #[error("Mật khẩu xác nhận không khớp")]
    PasswordConfirmationMismatch,

    // -------------------------------------------------------------------------
    // Product
    // -------------------------------------------------------------------------
    #[error("Tên sản phẩm không được để trống")]
    ProductNameRequired,

    #[error("Tên sản phẩm phải có ít nhất {min} ký tự")]
    ProductNameTooShort { min: usize },

    #[error("Tên sản phẩm không được vượt quá {max} ký tự")]
    ProductNameTooLong { max: usize },

    #[error("Giá sản phẩm không được để trống")]
    PriceRequired,

    #[error("Giá sản phẩm phải là một con số")]
    PriceNotNumeric,

    #[error("Giá sản phẩm phải lớn hơn 0")]
    PriceNotPositive,

    #[error("Giá sản phẩm không được vượt quá 999,999,999")]
    PriceTooLarge,

    #[error("Số lượng không được để trống")]
    QuantityRequired,

    #[error("Số lượng phải là số nguyên")]
    QuantityNotInteger,

    #[error("Số lượng không được âm")]
    QuantityNegative,

    #[error("Số lượng không được vượt quá 99,999")]
    QuantityTooLarge,

    #[error("Mô tả không được vượt quá {max} ký tự")]
    DescriptionTooLong { max: usize },

    #[error("Danh mục không được để trống")]
    CategoryRequired,

    // -------------------------------------------------------------------------
    // Submission payload (looser pre-submit check)
    // -------------------------------------------------------------------------
    #[error("Giá phải là số >= 0")]
    PayloadPriceInvalid,

    #[error("Số lượng phải là số >= 0")]
    PayloadQuantityInvalid,

    // -------------------------------------------------------------------------
    // Content safety
    // -------------------------------------------------------------------------
    #[error("Product name cannot be empty")]
    SafeNameRequired,

    #[error("Product name contains potentially dangerous content. HTML and script tags are not allowed.")]
    DangerousContent,

    /// Product id is not a UUID.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Serialises as the user-facing message, which is what the forms render.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors from stateful operations (the product list editor).
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id is loaded in the list.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Save or edit requested while no row is in edit mode.
    #[error("No product is being edited")]
    NotEditing,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
