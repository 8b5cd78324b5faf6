//! # Currency Formatting
//!
//! Locale-aware rendering of monetary amounts.
//!
//! ## Flow
//! ```text
//! format_currency(1234.5, "de-DE")
//!      │
//!      ├── locale None / ""?  → Err(MissingParameter { param: "locale" })
//!      │
//!      ├── currency_for_locale("de-DE")  → Currency::Eur  ("en*" → Usd)
//!      │
//!      ├── LocaleRules::resolve("de-DE") → decimal ',', group '.', suffix
//!      │
//!      └── "1.234,50 €"
//! ```
//!
//! ## Currency Selection
//! Tags starting with `"en"` (case-sensitive) are billed in USD, everything
//! else in EUR. This is not a real locale-to-currency mapping; consumers rely
//! on exactly this split.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{UtilsError, UtilsResult};
use crate::locale::{LocaleRules, SymbolPlacement, NBSP};

// =============================================================================
// Currency
// =============================================================================

/// The currencies `format_currency` can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar, selected for `en*` locales.
    Usd,
    /// Euro, selected for every other locale.
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Display symbol in the given locale.
    pub fn symbol_for(&self, rules: &LocaleRules) -> &'static str {
        match self {
            Currency::Usd => rules.usd_symbol,
            Currency::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Picks the currency implied by a locale tag.
///
/// ```rust
/// use shared_utils::currency::{currency_for_locale, Currency};
///
/// assert_eq!(currency_for_locale("en-GB"), Currency::Usd);
/// assert_eq!(currency_for_locale("fr-FR"), Currency::Eur);
/// ```
pub fn currency_for_locale(locale: &str) -> Currency {
    if locale.starts_with("en") {
        Currency::Usd
    } else {
        Currency::Eur
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats `amount` as a currency string for `locale`.
///
/// The locale is required: passing `None` or an empty string fails with
/// [`UtilsError::MissingParameter`]. The amount itself is not validated, so
/// negative, NaN and infinite values are rendered as-is.
///
/// ## Example
/// ```rust
/// use shared_utils::format_currency;
///
/// assert_eq!(format_currency(100.0, "en-US").unwrap(), "$100.00");
/// assert_eq!(format_currency(100.0, "de-DE").unwrap(), "100,00\u{a0}€");
/// assert!(format_currency(100.0, "").is_err());
/// assert!(format_currency(100.0, None).is_err());
/// ```
pub fn format_currency<'a, L>(amount: f64, locale: L) -> UtilsResult<String>
where
    L: Into<Option<&'a str>>,
{
    let locale = match locale.into() {
        Some(locale) if !locale.is_empty() => locale,
        _ => {
            warn!("format_currency called without a locale");
            return Err(UtilsError::missing("locale"));
        }
    };

    let currency = currency_for_locale(locale);
    let rules = LocaleRules::resolve(locale);
    debug!(locale, currency = %currency, "Formatting currency");

    Ok(render(amount, currency, &rules))
}

/// Lays out sign, symbol and digits according to the locale's pattern.
fn render(amount: f64, currency: Currency, rules: &LocaleRules) -> String {
    let negative = !amount.is_nan() && amount.is_sign_negative();
    let number = render_number(amount.abs(), rules);
    let symbol = currency.symbol_for(rules);
    let minus = if negative {
        rules.minus.to_string()
    } else {
        String::new()
    };

    match rules.placement {
        SymbolPlacement::Prefix { spaced } => {
            // Letter symbols ("USD") never touch the digits
            let letter_symbol = symbol.ends_with(|c: char| c.is_alphabetic());
            let gap = if spaced || letter_symbol {
                NBSP.to_string()
            } else {
                String::new()
            };
            if rules.minus_after_symbol {
                format!("{symbol}{gap}{minus}{number}")
            } else {
                format!("{minus}{symbol}{gap}{number}")
            }
        }
        SymbolPlacement::Suffix { spaced } => {
            let gap = if spaced { NBSP.to_string() } else { String::new() };
            format!("{minus}{number}{gap}{symbol}")
        }
    }
}

/// Renders a non-negative magnitude with two fraction digits.
fn render_number(magnitude: f64, rules: &LocaleRules) -> String {
    if magnitude.is_nan() {
        return "NaN".to_string();
    }
    if magnitude.is_infinite() {
        return "∞".to_string();
    }

    let (integer, fraction) = round_to_cents(magnitude);
    format!("{}{}{}", rules.group_digits(&integer), rules.decimal, fraction)
}

/// Rounds the shortest decimal representation of `magnitude` to two places,
/// half away from zero, returning the integer and fraction digit strings.
///
/// Operates on the decimal text, not `magnitude * 100.0`, so `1.005`
/// renders as `1.01`.
fn round_to_cents(magnitude: f64) -> (String, String) {
    // f64's Display is the shortest round-trip form and never uses exponents
    let text = magnitude.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(2).is_some_and(|&b| b >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if !carry {
                break;
            }
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let to_text = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (to_text(&digits[..split]), to_text(&digits[split..]))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_currency(100.0, "en-US").unwrap(), "$100.00");
        assert_eq!(format_currency(1234.5, "en-US").unwrap(), "$1,234.50");
        assert_eq!(format_currency(0.0, "en").unwrap(), "$0.00");
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_currency(100.0, "de-DE").unwrap(), "100,00\u{a0}€");
        assert_eq!(
            format_currency(1234567.891, "de-DE").unwrap(),
            "1.234.567,89\u{a0}€"
        );
    }

    #[test]
    fn test_missing_locale() {
        let err = format_currency(100.0, None).unwrap_err();
        assert_eq!(err.to_string(), "locale parameter is required");

        let err = format_currency(100.0, "").unwrap_err();
        assert_eq!(err, UtilsError::missing("locale"));
    }

    #[test]
    fn test_currency_selection_is_prefix_based() {
        assert_eq!(currency_for_locale("en"), Currency::Usd);
        assert_eq!(currency_for_locale("en-IN"), Currency::Usd);
        assert_eq!(currency_for_locale("ja-JP"), Currency::Eur);
        // Literal, case-sensitive prefix match
        assert_eq!(currency_for_locale("EN-US"), Currency::Eur);
    }

    #[test]
    fn test_non_us_english_uses_qualified_dollar() {
        assert_eq!(format_currency(5.0, "en-GB").unwrap(), "US$5.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-5.5, "en-US").unwrap(), "-$5.50");
        assert_eq!(format_currency(-5.5, "de-DE").unwrap(), "-5,50\u{a0}€");
        assert_eq!(format_currency(-5.5, "nl-NL").unwrap(), "€\u{a0}-5,50");
        assert_eq!(format_currency(-5.5, "pt-BR").unwrap(), "-€\u{a0}5,50");
        assert_eq!(format_currency(-5.5, "sv-SE").unwrap(), "\u{2212}5,50\u{a0}€");
    }

    #[test]
    fn test_negative_zero_keeps_minus_sign() {
        assert_eq!(format_currency(-0.0, "en-US").unwrap(), "-$0.00");
        assert_eq!(format_currency(-0.0, "de-DE").unwrap(), "-0,00\u{a0}€");
        assert_eq!(format_currency(-0.001, "en-US").unwrap(), "-$0.00");
        assert_eq!(format_currency(0.0, "de-DE").unwrap(), "0,00\u{a0}€");
    }

    #[test]
    fn test_letter_symbol_is_spaced() {
        assert_eq!(format_currency(5.0, "en-AU").unwrap(), "USD\u{a0}5.00");
        assert_eq!(format_currency(-5.0, "en-AU").unwrap(), "-USD\u{a0}5.00");
    }

    #[test]
    fn test_non_finite_amounts_pass_through() {
        assert_eq!(format_currency(f64::NAN, "en-US").unwrap(), "$NaN");
        assert_eq!(format_currency(f64::INFINITY, "en-US").unwrap(), "$∞");
        assert_eq!(format_currency(f64::NEG_INFINITY, "de-DE").unwrap(), "-∞\u{a0}€");
    }

    #[test]
    fn test_rounding_uses_decimal_representation() {
        assert_eq!(format_currency(1.005, "en-US").unwrap(), "$1.01");
        assert_eq!(format_currency(2.675, "en-US").unwrap(), "$2.68");
        assert_eq!(format_currency(0.004, "en-US").unwrap(), "$0.00");
        assert_eq!(format_currency(999.995, "en-US").unwrap(), "$1,000.00");
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(0.0), ("0".to_string(), "00".to_string()));
        assert_eq!(round_to_cents(9.999), ("10".to_string(), "00".to_string()));
        assert_eq!(round_to_cents(12.3), ("12".to_string(), "30".to_string()));
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Eur.code(), "EUR");
    }
}
