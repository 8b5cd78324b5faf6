//! # Locale Rules
//!
//! Number and currency formatting symbols keyed by locale tag.
//!
//! The table follows CLDR for the languages our services ship in. Anything
//! not listed falls back to the root (English-style) symbols, which is what
//! a host number formatter does for an unsupported locale.
//!
//! ```text
//! ┌───────────┬─────────┬───────┬──────────────┬──────────────────────────┐
//! │ language  │ decimal │ group │ min grouping │ example (EUR)            │
//! ├───────────┼─────────┼───────┼──────────────┼──────────────────────────┤
//! │ en (root) │   .     │   ,   │      1       │ €1,234.56                │
//! │ de, it    │   ,     │   .   │      1       │ 1.234,56 €               │
//! │ de-AT     │   ,     │   .   │      1       │ € 1.234,56               │
//! │ es        │   ,     │   .   │      2       │ 1234,56 € / 12.345,67 €  │
//! │ fr        │   ,     │ U+202F│      1       │ 1 234,56 €               │
//! │ nl        │   ,     │   .   │      1       │ € 1.234,56 / € -1,00     │
//! │ pt (BR)   │   ,     │   .   │      1       │ € 1.234,56               │
//! │ pt-PT, pl │   ,     │ U+00A0│      2       │ 1234,56 €                │
//! │ ru        │   ,     │ U+00A0│      1       │ 1 234,56 €               │
//! │ sv        │   ,     │ U+00A0│      1       │ 1 234,56 € (minus U+2212)│
//! │ ja, zh, ko│   .     │   ,   │      1       │ €1,234.56                │
//! └───────────┴─────────┴───────┴──────────────┴──────────────────────────┘
//! ```

/// No-break space, used between a number and a spaced currency symbol.
pub const NBSP: char = '\u{a0}';

/// Narrow no-break space (French digit grouping).
pub const NARROW_NBSP: char = '\u{202f}';

/// Where the currency symbol sits relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`, or `€ 1,00` when spaced.
    Prefix { spaced: bool },
    /// `1,00 €`, or `1,00€` when not spaced.
    Suffix { spaced: bool },
}

/// Formatting symbols for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRules {
    /// Lowercased primary language subtag (`"en"`, `"de"`, ...).
    pub language: String,
    /// Uppercased region subtag, if the tag carried one.
    pub region: Option<String>,
    pub decimal: char,
    pub group: char,
    /// Size of the rightmost digit group.
    pub primary_group: usize,
    /// Size of every further group (2 for Indian-style grouping).
    pub secondary_group: usize,
    /// Integer digits beyond the first group required before grouping kicks in.
    pub min_grouping_digits: usize,
    pub placement: SymbolPlacement,
    pub minus: char,
    /// `€ -1,00` rather than `-€ 1,00` (prefix placement only).
    pub minus_after_symbol: bool,
    /// Symbol used for US dollars in this locale.
    pub usd_symbol: &'static str,
}

impl LocaleRules {
    /// Resolves the rules for a locale tag such as `en-US`, `de_DE` or `pt-BR`.
    ///
    /// Matching is case-insensitive. Script subtags (`zh-Hant-TW`) are skipped.
    ///
    /// ```rust
    /// use shared_utils::locale::LocaleRules;
    ///
    /// let rules = LocaleRules::resolve("de-DE");
    /// assert_eq!(rules.decimal, ',');
    /// assert_eq!(rules.group, '.');
    /// ```
    pub fn resolve(locale: &str) -> Self {
        let (language, region) = parse_tag(locale);
        let mut rules = Self::root(language, region);

        match rules.language.as_str() {
            "de" if rules.region.as_deref() == Some("AT") => {
                rules.decimal = ',';
                rules.group = '.';
                rules.placement = SymbolPlacement::Prefix { spaced: true };
            }
            "de" | "it" => {
                rules.decimal = ',';
                rules.group = '.';
                rules.placement = SymbolPlacement::Suffix { spaced: true };
            }
            "es" => {
                rules.decimal = ',';
                rules.group = '.';
                rules.min_grouping_digits = 2;
                rules.placement = SymbolPlacement::Suffix { spaced: true };
            }
            "fr" => {
                rules.decimal = ',';
                rules.group = NARROW_NBSP;
                rules.placement = SymbolPlacement::Suffix { spaced: true };
            }
            "nl" => {
                rules.decimal = ',';
                rules.group = '.';
                rules.placement = SymbolPlacement::Prefix { spaced: true };
                rules.minus_after_symbol = true;
            }
            "pt" if rules.region.as_deref() == Some("PT") => {
                rules.decimal = ',';
                rules.group = NBSP;
                rules.min_grouping_digits = 2;
                rules.placement = SymbolPlacement::Suffix { spaced: true };
            }
            "pt" => {
                rules.decimal = ',';
                rules.group = '.';
                rules.placement = SymbolPlacement::Prefix { spaced: true };
            }
            "pl" => {
                rules.decimal = ',';
                rules.group = NBSP;
                rules.min_grouping_digits = 2;
                rules.placement = SymbolPlacement::Suffix { spaced: true };
            }
            "ru" => {
                rules.decimal = ',';
                rules.group = NBSP;
                rules.placement = SymbolPlacement::Suffix { spaced: true };
            }
            "sv" => {
                rules.decimal = ',';
                rules.group = NBSP;
                rules.placement = SymbolPlacement::Suffix { spaced: true };
                rules.minus = '\u{2212}';
            }
            "en" => {
                rules.usd_symbol = match rules.region.as_deref() {
                    None | Some("US") | Some("IN") => "$",
                    Some("AU") => "USD",
                    Some(_) => "US$",
                };
                if rules.region.as_deref() == Some("IN") {
                    rules.secondary_group = 2;
                }
            }
            // ja, zh, ko and unknown languages keep the root symbols
            _ => {}
        }

        rules
    }

    fn root(language: String, region: Option<String>) -> Self {
        LocaleRules {
            language,
            region,
            decimal: '.',
            group: ',',
            primary_group: 3,
            secondary_group: 3,
            min_grouping_digits: 1,
            placement: SymbolPlacement::Prefix { spaced: false },
            minus: '-',
            minus_after_symbol: false,
            usd_symbol: "US$",
        }
    }

    /// Inserts group separators into a string of integer digits.
    pub(crate) fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        if len < self.primary_group + self.min_grouping_digits {
            return digits.to_string();
        }

        // Split points, counted from the right
        let mut breaks = Vec::new();
        let mut pos = self.primary_group;
        while pos < len {
            breaks.push(len - pos);
            pos += self.secondary_group;
        }

        let mut out = String::with_capacity(len + breaks.len() * self.group.len_utf8());
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && breaks.contains(&i) {
                out.push(self.group);
            }
            out.push(c);
        }
        out
    }
}

/// Splits a tag into a lowercased language and an optional uppercased region.
fn parse_tag(locale: &str) -> (String, Option<String>) {
    let mut subtags = locale
        .trim()
        .split(['-', '_'])
        .filter(|s| !s.is_empty());

    let language = subtags.next().unwrap_or_default().to_ascii_lowercase();
    let region = subtags
        .find(|s| {
            (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
                || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
        })
        .map(|s| s.to_ascii_uppercase());

    (language, region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag("en-US"), ("en".to_string(), Some("US".to_string())));
        assert_eq!(parse_tag("pt_br"), ("pt".to_string(), Some("BR".to_string())));
        assert_eq!(parse_tag("zh-Hant-TW"), ("zh".to_string(), Some("TW".to_string())));
        assert_eq!(parse_tag("es-419"), ("es".to_string(), Some("419".to_string())));
        assert_eq!(parse_tag("de"), ("de".to_string(), None));
    }

    #[test]
    fn test_usd_symbol_by_region() {
        assert_eq!(LocaleRules::resolve("en").usd_symbol, "$");
        assert_eq!(LocaleRules::resolve("en-US").usd_symbol, "$");
        assert_eq!(LocaleRules::resolve("en-IN").usd_symbol, "$");
        assert_eq!(LocaleRules::resolve("en-AU").usd_symbol, "USD");
        assert_eq!(LocaleRules::resolve("en-GB").usd_symbol, "US$");
    }

    #[test]
    fn test_unknown_language_falls_back_to_root() {
        let rules = LocaleRules::resolve("xx-YY");
        assert_eq!(rules.decimal, '.');
        assert_eq!(rules.group, ',');
        assert_eq!(rules.placement, SymbolPlacement::Prefix { spaced: false });
    }

    #[test]
    fn test_group_digits() {
        let en = LocaleRules::resolve("en-US");
        assert_eq!(en.group_digits("1"), "1");
        assert_eq!(en.group_digits("999"), "999");
        assert_eq!(en.group_digits("1000"), "1,000");
        assert_eq!(en.group_digits("1234567"), "1,234,567");
    }

    #[test]
    fn test_group_digits_min_grouping() {
        let es = LocaleRules::resolve("es-ES");
        assert_eq!(es.group_digits("1234"), "1234");
        assert_eq!(es.group_digits("12345"), "12.345");
    }

    #[test]
    fn test_austrian_german_puts_symbol_first() {
        let de_at = LocaleRules::resolve("de-AT");
        assert_eq!(de_at.placement, SymbolPlacement::Prefix { spaced: true });
        assert_eq!(de_at.group, '.');

        let de_de = LocaleRules::resolve("de-DE");
        assert_eq!(de_de.placement, SymbolPlacement::Suffix { spaced: true });
    }

    #[test]
    fn test_group_digits_indian() {
        let en_in = LocaleRules::resolve("en-IN");
        assert_eq!(en_in.group_digits("1234567"), "12,34,567");
    }
}
