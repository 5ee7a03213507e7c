//! Rejection of obviously dangerous markup in product names.
//!
//! Output escaping in the UI is the real XSS defence. This only refuses
//! input that is plainly an attempt to inject script.

use crate::error::ValidationError;
use crate::validation::ValidationResult;

const DANGEROUS_PATTERNS: &[&str] = &[
    "<script",
    "</script>",
    "javascript:",
    "onerror=",
    "onload=",
    "onclick=",
    "<iframe",
];

/// True when `input` contains a known script-injection pattern
/// (case-insensitive).
///
/// ```rust
/// use stockroom_core::sanitize::contains_dangerous_content;
///
/// assert!(contains_dangerous_content("<SCRIPT>alert(1)</SCRIPT>"));
/// assert!(!contains_dangerous_content("Laptop Dell"));
/// ```
pub fn contains_dangerous_content(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let lower = input.to_lowercase();
    DANGEROUS_PATTERNS.iter().any(|p| lower.contains(p))
        || (lower.contains("<img") && lower.contains("onerror"))
}

/// Validates a product name for script content.
pub fn validate_safe_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::SafeNameRequired);
    }

    if contains_dangerous_content(name) {
        return Err(ValidationError::DangerousContent);
    }

    Ok(())
}
