//! # Price Module
//!
//! Display formatting for Vietnamese dong amounts.
//!
//! ## Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  vi-VN currency format                                                  │
//! │                                                                         │
//! │    15000000   ──►  "15.000.000 ₫"                                       │
//! │    1499.6     ──►  "1.500 ₫"        (dong has no minor unit)            │
//! │    -25000     ──►  "-25.000 ₫"                                          │
//! │                                                                         │
//! │  Thousands separator: '.'                                               │
//! │  Symbol: '₫' after a NO-BREAK SPACE (U+00A0)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The backend stores prices as floating point; they are rounded to whole
//! dong only for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Currency symbol for the Vietnamese dong.
pub const DONG_SYMBOL: char = '₫';

/// An amount in whole Vietnamese dong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dong(i64);

impl Dong {
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Dong(amount)
    }

    /// Rounds a backend price to whole dong (half away from zero).
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_price(price: f64) -> Option<Self> {
        if price.is_finite() {
            Some(Dong(price.round() as i64))
        } else {
            None
        }
    }

    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Dong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{grouped}\u{a0}{DONG_SYMBOL}")
    }
}

/// Formats a product price for the product list.
///
/// ```rust
/// use stockroom_core::price::format_price;
///
/// assert_eq!(format_price(15_000_000.0), "15.000.000\u{a0}₫");
/// ```
pub fn format_price(price: f64) -> String {
    match Dong::from_price(price) {
        Some(dong) => dong.to_string(),
        None if price.is_nan() => format!("NaN\u{a0}{DONG_SYMBOL}"),
        None if price < 0.0 => format!("-∞\u{a0}{DONG_SYMBOL}"),
        None => format!("∞\u{a0}{DONG_SYMBOL}"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
