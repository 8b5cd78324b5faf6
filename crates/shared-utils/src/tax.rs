//! # Tax Calculation
//!
//! `amount × rate`, rounded to cents.
//!
//! ## Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  HALF-UP ON THE CENT BOUNDARY (ties toward +∞)                      │
//! │                                                                     │
//! │    0.125  →  0.13                                                   │
//! │    0.135  →  0.14     (not banker's rounding: no round-to-even)     │
//! │   -0.125  → -0.12                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::DEFAULT_TAX_RATE;

/// Calculates tax on `amount`, rounded to two decimal places.
///
/// `tax_rate` defaults to `0.1` (10%) when `None` is passed. Neither input
/// is bounds-checked: negative or oversized values scale the result
/// accordingly, and NaN/infinite inputs propagate.
///
/// ## Example
/// ```rust
/// use shared_utils::calculate_tax;
///
/// assert_eq!(calculate_tax(100.0, None), 10.0);
/// assert_eq!(calculate_tax(100.0, 0.2), 20.0);
/// assert_eq!(calculate_tax(33.33, 0.1), 3.33);
/// ```
pub fn calculate_tax(amount: f64, tax_rate: impl Into<Option<f64>>) -> f64 {
    let tax_rate = tax_rate.into().unwrap_or(DEFAULT_TAX_RATE);
    round_half_up(amount * tax_rate * 100.0) / 100.0
}

/// Rounds to the nearest integer with ties going toward positive infinity.
///
/// `f64::round` sends ties away from zero, which differs for negative
/// halves (`-2.5` → `-3.0` there, `-2.0` here).
fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let floor = value.floor();
    // Exact for every |value| below 2^52; above that there is no fraction
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
