//! # Validation Module
//!
//! Order total checks run before an order is accepted.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate_order_total(total)                                           │
//! │                                                                         │
//! │       ├── not a number?      → false                                   │
//! │       ├── NaN?               → false                                   │
//! │       ├── total < 0?         → false                                   │
//! │       ├── total > 1,000,000? → false                                   │
//! │       └── otherwise          → true   (0 and 1,000,000 are valid)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These are predicates, not `Result`s: an invalid total is an expected
//! answer, never an error.

use serde_json::Value;

use crate::MAX_ORDER_TOTAL;

/// Checks that an order total is a number within `[0, 1_000_000]`.
///
/// ## Example
/// ```rust
/// use shared_utils::validate_order_total;
///
/// assert!(validate_order_total(0.0));
/// assert!(validate_order_total(1_000_000.0));
/// assert!(!validate_order_total(1_000_001.0));
/// assert!(!validate_order_total(-0.0001));
/// assert!(!validate_order_total(f64::NAN));
/// ```
#[inline]
pub fn validate_order_total(total: f64) -> bool {
    validate_order_total_with(total, MAX_ORDER_TOTAL)
}

/// Same as [`validate_order_total`] with a caller-supplied upper bound.
pub fn validate_order_total_with(total: f64, max: f64) -> bool {
    // NaN is outside every range
    (0.0..=max).contains(&total)
}

/// Validates a dynamically typed total, e.g. straight from a JSON body.
///
/// Strings, `null`, booleans, arrays and objects are rejected even when
/// they look numeric (`"100"` is not a total).
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use shared_utils::validation::validate_order_total_value;
///
/// assert!(validate_order_total_value(&json!(100)));
/// assert!(!validate_order_total_value(&json!("100")));
/// assert!(!validate_order_total_value(&json!(null)));
/// ```
pub fn validate_order_total_value(total: &Value) -> bool {
    validate_order_total_value_with(total, MAX_ORDER_TOTAL)
}

/// Same as [`validate_order_total_value`] with a caller-supplied upper bound.
pub fn validate_order_total_value_with(total: &Value, max: f64) -> bool {
    match total {
        Value::Number(n) => n
            .as_f64()
            .is_some_and(|total| validate_order_total_with(total, max)),
        _ => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_totals() {
        assert!(validate_order_total(100.0));
        assert!(validate_order_total(0.0));
        assert!(validate_order_total(999_999.0));
        assert!(validate_order_total(-0.0));
    }

    #[test]
    fn test_negative_totals() {
        assert!(!validate_order_total(-1.0));
        assert!(!validate_order_total(-100.0));
        assert!(!validate_order_total(-0.0000001));
    }

    #[test]
    fn test_boundaries() {
        assert!(validate_order_total(1_000_000.0));
        assert!(!validate_order_total(1_000_000.0000001));
        assert!(!validate_order_total(1_000_001.0));
    }

    #[test]
    fn test_non_finite() {
        assert!(!validate_order_total(f64::NAN));
        assert!(!validate_order_total(f64::INFINITY));
        assert!(!validate_order_total(f64::NEG_INFINITY));
    }

    #[test]
    fn test_custom_max() {
        assert!(validate_order_total_with(500.0, 500.0));
        assert!(!validate_order_total_with(500.01, 500.0));
    }

    #[test]
    fn test_value_non_numbers() {
        assert!(!validate_order_total_value(&json!("100")));
        assert!(!validate_order_total_value(&json!(null)));
        assert!(!validate_order_total_value(&json!(true)));
        assert!(!validate_order_total_value(&json!([100])));
        assert!(!validate_order_total_value(&json!({ "total": 100 })));
    }

    #[test]
    fn test_value_numbers() {
        assert!(validate_order_total_value(&json!(0)));
        assert!(validate_order_total_value(&json!(250.75)));
        assert!(validate_order_total_value(&json!(1_000_000)));
        assert!(!validate_order_total_value(&json!(1_000_001)));
        assert!(!validate_order_total_value(&json!(-1)));
        assert!(!validate_order_total_value(&json!(u64::MAX)));
    }

    #[test]
    fn test_repeated_calls_agree() {
        for total in [-1.0, 0.0, 42.5, 1_000_000.0, 2_000_000.0] {
            assert_eq!(validate_order_total(total), validate_order_total(total));
        }
    }
}
