//! # stockroom-core: Pure Form Logic for Stockroom
//!
//! This crate holds the rules behind the login, registration and product
//! inventory screens, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Login ──► Register ──► Product list ──► Add / Edit form     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated .ts types (ts-rs)            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐  │   │
//! │  │   │ validation │  │  types   │  │  price   │  │   editor   │  │   │
//! │  │   │ login      │  │ Product* │  │  Dong    │  │ list state │  │   │
//! │  │   │ product    │  │ Numeric  │  │ format   │  │ search     │  │   │
//! │  │   └────────────┘  └──────────┘  └──────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO HTTP • NO STORAGE • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            REST backend (external: /api/auth, /api/products)    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Login, credential, registration, product and payload rules
//! - [`types`] - Form inputs and backend product shapes
//! - [`price`] - Vietnamese dong formatting
//! - [`error`] - Validation and domain error types
//! - [`search`] - Client-side product search
//! - [`editor`] - Product list view state (inline edit, add, delete)
//! - [`auth`] - Login screen messages
//! - [`sanitize`] - Script-injection check for product names
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::validation::validate_login_form;
//!
//! let result = validate_login_form("", "");
//! assert_eq!(
//!     result.username_error.unwrap().to_string(),
//!     "Tên đăng nhập không được để trống"
//! );
//! assert_eq!(result.password_error.unwrap().to_string(), "Mật khẩu là bắt buộc");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod editor;
pub mod error;
pub mod price;
pub mod sanitize;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use editor::{ListOperation, ProductListEditor};
pub use error::{CoreError, CoreResult, ValidationError};
pub use price::{format_price, Dong};
pub use types::*;
pub use validation::{
    validate_login_form, validate_product, validate_product_payload, LoginValidationResult,
    ProductValidationErrors,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum username length (strength and registration rules).
pub const USERNAME_MIN_LEN: usize = 3;

/// Maximum username length (strength and registration rules).
pub const USERNAME_MAX_LEN: usize = 50;

/// Minimum password length, shared by every rule set.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Maximum password length, shared by every rule set.
pub const PASSWORD_MAX_LEN: usize = 100;

pub const MIN_PRODUCT_NAME_LEN: usize = 3;
pub const MAX_PRODUCT_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Highest accepted product price, in dong.
pub const MAX_PRICE: f64 = 999_999_999.0;

/// Highest accepted stock quantity.
pub const MAX_QUANTITY: f64 = 99_999.0;
