//! # shared-utils: Order & Money Helpers for Services
//!
//! Four independent helpers reused by the order, billing and checkout
//! services. None of them share state; the only ambient inputs are the wall
//! clock and a thread-local PRNG used for order IDs.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         shared-utils                                    │
//! │                                                                         │
//! │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌────────────┐       │
//! │   │  currency  │  │ validation │  │  order_id  │  │    tax     │       │
//! │   │  format_   │  │ validate_  │  │ generate_  │  │ calculate_ │       │
//! │   │  currency  │  │ order_total│  │ order_id   │  │ tax        │       │
//! │   └─────┬──────┘  └────────────┘  └─────┬──────┘  └────────────┘       │
//! │         │                               │                               │
//! │   ┌─────▼──────┐                  ┌─────▼──────┐                        │
//! │   │   locale   │                  │   base36   │                        │
//! │   └────────────┘                  └────────────┘                        │
//! │                                                                         │
//! │   SharedUtils: all four behind one value, optionally configured        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Locale-aware currency formatting
//! - [`locale`] - Per-locale separators and symbol placement
//! - [`validation`] - Order total bounds checks
//! - [`order_id`] - Order ID generation and parsing
//! - [`tax`] - Tax calculation with cent rounding
//! - [`config`] - Overridable order rules
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shared_utils::{calculate_tax, format_currency, generate_order_id, validate_order_total};
//!
//! let total = 42.5;
//! assert!(validate_order_total(total));
//!
//! let tax = calculate_tax(total, None);
//! assert_eq!(tax, 4.25);
//!
//! assert_eq!(format_currency(total + tax, "en-US").unwrap(), "$46.75");
//! assert!(generate_order_id().starts_with("ORD-"));
//! ```

pub mod base36;
pub mod config;
pub mod currency;
pub mod error;
pub mod locale;
pub mod order_id;
pub mod tax;
pub mod validation;

pub use config::UtilsConfig;
pub use currency::{currency_for_locale, format_currency, Currency};
pub use error::{UtilsError, UtilsResult};
pub use order_id::{generate_order_id, OrderId};
pub use tax::calculate_tax;
pub use validation::validate_order_total;

use rand::Rng;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest order total accepted by [`validate_order_total`] (inclusive).
pub const MAX_ORDER_TOTAL: f64 = 1_000_000.0;

/// Tax rate applied by [`calculate_tax`] when none is given (10%).
pub const DEFAULT_TAX_RATE: f64 = 0.1;

/// Leading segment of every generated order ID.
pub const ORDER_ID_PREFIX: &str = "ORD";

// =============================================================================
// Bundle
// =============================================================================

/// All four helpers behind a single value.
///
/// `SharedUtils::default()` behaves exactly like the free functions. A
/// service that needs different limits builds one from a [`UtilsConfig`].
///
/// ## Example
/// ```rust
/// use shared_utils::{SharedUtils, UtilsConfig};
///
/// let utils = SharedUtils::default();
/// assert_eq!(utils.calculate_tax(100.0, None), 10.0);
///
/// let config = UtilsConfig::from_toml_str("default_tax_rate = 0.2").unwrap();
/// let utils = SharedUtils::new(config);
/// assert_eq!(utils.calculate_tax(100.0, None), 20.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedUtils {
    config: UtilsConfig,
}

impl SharedUtils {
    pub fn new(config: UtilsConfig) -> Self {
        SharedUtils { config }
    }

    pub fn config(&self) -> &UtilsConfig {
        &self.config
    }

    /// See [`currency::format_currency`].
    pub fn format_currency<'a, L>(&self, amount: f64, locale: L) -> UtilsResult<String>
    where
        L: Into<Option<&'a str>>,
    {
        currency::format_currency(amount, locale)
    }

    /// See [`validation::validate_order_total`]; the bound comes from config.
    pub fn validate_order_total(&self, total: f64) -> bool {
        validation::validate_order_total_with(total, self.config.max_order_total)
    }

    /// Dynamically typed variant of [`SharedUtils::validate_order_total`].
    pub fn validate_order_total_value(&self, total: &serde_json::Value) -> bool {
        validation::validate_order_total_value_with(total, self.config.max_order_total)
    }

    /// See [`order_id::generate_order_id`]; the prefix comes from config.
    pub fn generate_order_id(&self) -> String {
        self.generate_order_id_with(chrono::Utc::now(), &mut rand::rng())
    }

    /// Deterministic variant of [`SharedUtils::generate_order_id`].
    pub fn generate_order_id_with<R: Rng>(
        &self,
        now: chrono::DateTime<chrono::Utc>,
        rng: &mut R,
    ) -> String {
        order_id::generate_order_id_with_prefix(&self.config.order_id_prefix, now, rng)
    }

    /// See [`tax::calculate_tax`]; `None` falls back to the configured rate.
    pub fn calculate_tax(&self, amount: f64, tax_rate: impl Into<Option<f64>>) -> f64 {
        let rate = tax_rate.into().unwrap_or(self.config.default_tax_rate);
        tax::calculate_tax(amount, rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bundle_matches_free_functions() {
        let utils = SharedUtils::default();

        assert_eq!(
            utils.format_currency(100.0, "en-US"),
            format_currency(100.0, "en-US")
        );
        assert_eq!(utils.validate_order_total(1_000_000.0), validate_order_total(1_000_000.0));
        assert_eq!(utils.validate_order_total(-1.0), validate_order_total(-1.0));
        assert_eq!(utils.calculate_tax(33.33, None), calculate_tax(33.33, None));
        assert!(utils.generate_order_id().starts_with("ORD-"));
    }

    #[test]
    fn test_configured_bundle() {
        let utils = SharedUtils::new(UtilsConfig {
            max_order_total: 500.0,
            default_tax_rate: 0.2,
            order_id_prefix: "INV".to_string(),
        });

        assert!(utils.validate_order_total(500.0));
        assert!(!utils.validate_order_total(500.01));
        assert!(!utils.validate_order_total_value(&serde_json::json!(501)));
        assert_eq!(utils.calculate_tax(100.0, None), 20.0);
        assert_eq!(utils.calculate_tax(100.0, 0.1), 10.0);
        assert!(utils.generate_order_id().starts_with("INV-"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<SharedUtils>();
        assert_send_sync::<Currency>();
        assert_send_sync::<OrderId>();
        assert_send_sync::<UtilsConfig>();
        assert_send_sync::<locale::LocaleRules>();
        assert_send_sync::<UtilsError>();
    }

    #[test]
    fn test_bundle_locale_still_required() {
        let utils = SharedUtils::default();
        assert!(utils.format_currency(1.0, "").is_err());
        assert!(utils.format_currency(1.0, None).is_err());
    }
}
