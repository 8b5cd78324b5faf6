//! # Configuration
//!
//! Per-service overrides for the order rules.
//!
//! ## Configuration File Format
//! ```toml
//! # shared-utils.toml
//! max_order_total = 1000000.0
//! default_tax_rate = 0.1
//! order_id_prefix = "ORD"
//! ```
//!
//! Every key is optional; missing keys take the defaults below, which are
//! the behavior of the free functions.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{UtilsError, UtilsResult};
use crate::{DEFAULT_TAX_RATE, MAX_ORDER_TOTAL, ORDER_ID_PREFIX};

/// Tunable order rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct UtilsConfig {
    /// Inclusive upper bound for `validate_order_total`.
    pub max_order_total: f64,

    /// Rate used by `calculate_tax` when the caller passes none.
    pub default_tax_rate: f64,

    /// Leading segment of generated order IDs.
    pub order_id_prefix: String,
}

impl Default for UtilsConfig {
    fn default() -> Self {
        UtilsConfig {
            max_order_total: MAX_ORDER_TOTAL,
            default_tax_rate: DEFAULT_TAX_RATE,
            order_id_prefix: ORDER_ID_PREFIX.to_string(),
        }
    }
}

impl UtilsConfig {
    /// Parses and validates a TOML document.
    ///
    /// ## Example
    /// ```rust
    /// use shared_utils::config::UtilsConfig;
    ///
    /// let config = UtilsConfig::from_toml_str("default_tax_rate = 0.2").unwrap();
    /// assert_eq!(config.default_tax_rate, 0.2);
    /// assert_eq!(config.order_id_prefix, "ORD");
    /// ```
    pub fn from_toml_str(s: &str) -> UtilsResult<Self> {
        let config: UtilsConfig = toml::from_str(s)?;
        config.validate()?;
        debug!(
            max_order_total = config.max_order_total,
            default_tax_rate = config.default_tax_rate,
            order_id_prefix = %config.order_id_prefix,
            "Loaded utils config"
        );
        Ok(config)
    }

    /// Checks the values are usable.
    ///
    /// ## Rules
    /// - `max_order_total` finite and >= 0
    /// - `default_tax_rate` finite
    /// - `order_id_prefix` non-empty ASCII alphanumeric (no `-`, which
    ///   separates the ID segments)
    pub fn validate(&self) -> UtilsResult<()> {
        if !self.max_order_total.is_finite() || self.max_order_total < 0.0 {
            return Err(UtilsError::Config(format!(
                "max_order_total must be a finite, non-negative number (got {})",
                self.max_order_total
            )));
        }

        if !self.default_tax_rate.is_finite() {
            return Err(UtilsError::Config(format!(
                "default_tax_rate must be finite (got {})",
                self.default_tax_rate
            )));
        }

        if self.order_id_prefix.is_empty()
            || !self
                .order_id_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(UtilsError::Config(format!(
                "order_id_prefix must be non-empty and alphanumeric (got '{}')",
                self.order_id_prefix
            )));
        }

        Ok(())
    }
}
