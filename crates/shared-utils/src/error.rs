//! # Error Types
//!
//! Error types for shared-utils.
//!
//! ## Who Raises What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Sources                                   │
//! │                                                                         │
//! │  format_currency        ──► MissingParameter  (locale absent/empty)    │
//! │  OrderId::parse         ──► InvalidFormat     (malformed token)        │
//! │  UtilsConfig loading    ──► Config            (bad TOML / bad values)  │
//! │                                                                         │
//! │  validate_order_total, generate_order_id, calculate_tax: never fail    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors raised by shared-utils.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilsError {
    /// A required parameter was absent or empty.
    ///
    /// ## When This Occurs
    /// - `format_currency` called with `None` or `""` as the locale
    #[error("{param} parameter is required")]
    MissingParameter { param: String },

    /// A value did not have the expected shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Configuration could not be parsed or failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl UtilsError {
    pub(crate) fn missing(param: &str) -> Self {
        UtilsError::MissingParameter {
            param: param.to_string(),
        }
    }

    pub(crate) fn invalid_format(field: &str, reason: impl Into<String>) -> Self {
        UtilsError::InvalidFormat {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for UtilsError {
    fn from(err: toml::de::Error) -> Self {
        UtilsError::Config(err.to_string())
    }
}

/// Convenience type alias for Results with UtilsError.
pub type UtilsResult<T> = Result<T, UtilsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let err = UtilsError::missing("locale");
        assert_eq!(err.to_string(), "locale parameter is required");
    }

    #[test]
    fn test_invalid_format_message() {
        let err = UtilsError::invalid_format("order_id", "missing ORD prefix");
        assert_eq!(
            err.to_string(),
            "order_id has invalid format: missing ORD prefix"
        );
    }

    #[test]
    fn test_toml_error_converts_to_config() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: UtilsError = toml_err.into();
        assert!(matches!(err, UtilsError::Config(_)));
    }
}
