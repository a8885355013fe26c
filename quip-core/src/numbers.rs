//! Table-driven locale number service.
//!
//! Hosts normally plug in their own [`NumberLocale`]; this table covers the
//! common CLDR decimal and grouping symbols so the engine works standalone.
//! Formatting follows the `#,##0.###` decimal pattern: groups of three and
//! at most three fraction digits, rounded half to even.

use quip_plugin::{Locale, NumberFormatError, NumberLocale};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Decimal and grouping separators of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSymbols {
    pub decimal: String,
    pub group: String,
}

impl NumberSymbols {
    pub fn new(decimal: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            decimal: decimal.into(),
            group: group.into(),
        }
    }
}

/// Fraction digits kept by the `#,##0.###` pattern.
const FRACTION_DIGITS: u32 = 3;

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

const BUILTIN: &[(&str, &str, &str)] = &[
    ("en", ".", ","),
    ("de", ",", "."),
    ("de_AT", ",", NBSP),
    ("de_CH", ".", "\u{2019}"),
    ("fr", ",", NNBSP),
    ("fr_CH", ",", NNBSP),
    ("es", ",", "."),
    ("es_MX", ".", ","),
    ("it", ",", "."),
    ("it_CH", ".", "\u{2019}"),
    ("nl", ",", "."),
    ("pt", ",", NBSP),
    ("pt_BR", ",", "."),
    ("ru", ",", NBSP),
    ("uk", ",", NBSP),
    ("pl", ",", NBSP),
    ("cs", ",", NBSP),
    ("sk", ",", NBSP),
    ("hu", ",", NBSP),
    ("fi", ",", NBSP),
    ("sv", ",", NBSP),
    ("nb", ",", NBSP),
    ("da", ",", "."),
    ("tr", ",", "."),
    ("el", ",", "."),
    ("ro", ",", "."),
    ("id", ",", "."),
    ("vi", ",", "."),
    ("ja", ".", ","),
    ("ko", ".", ","),
    ("zh", ".", ","),
    ("th", ".", ","),
    ("he", ".", ","),
];

fn is_space_variant(c: char) -> bool {
    c == ' ' || c == '\u{a0}' || c == '\u{202f}'
}

/// [`NumberLocale`] backed by an in-memory symbol table.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    symbols: HashMap<String, NumberSymbols>,
}

impl LocaleTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        let symbols = BUILTIN
            .iter()
            .map(|&(tag, decimal, group)| (tag.to_string(), NumberSymbols::new(decimal, group)))
            .collect();
        Self { symbols }
    }

    /// The built-in table with configured entries added on top.
    ///
    /// Override keys are normalized (`pt-br` becomes `pt_BR`); keys that are
    /// not locale tags are skipped with a warning.
    pub fn with_overrides(overrides: &HashMap<String, NumberSymbols>) -> Self {
        let mut table = Self::builtin();
        for (tag, symbols) in overrides {
            match tag.parse::<Locale>() {
                Ok(locale) => table.insert(&locale, symbols.clone()),
                Err(e) => warn!("Ignoring number format for '{}': {}", tag, e),
            }
        }
        table
    }

    pub fn insert(&mut self, locale: &Locale, symbols: NumberSymbols) {
        self.symbols.insert(locale.to_string(), symbols);
    }

    /// Symbols for the most specific known tag of `locale`.
    pub fn lookup(&self, locale: &Locale) -> Option<&NumberSymbols> {
        locale
            .fallbacks()
            .iter()
            .find_map(|tag| self.symbols.get(tag))
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NumberLocale for LocaleTable {
    fn supports(&self, locale: &Locale) -> bool {
        self.lookup(locale).is_some()
    }

    fn parse_decimal(&self, text: &str, locale: &Locale) -> Result<Decimal, NumberFormatError> {
        let error = || NumberFormatError {
            text: text.to_string(),
            locale: locale.to_string(),
        };
        let symbols = self.lookup(locale).ok_or_else(error)?;
        let group_is_space = symbols.group.chars().all(is_space_variant);

        let mut normalized = String::with_capacity(text.len());
        for c in text.trim().chars() {
            if symbols.group.contains(c) || (group_is_space && is_space_variant(c)) {
                continue;
            }
            if symbols.decimal.contains(c) {
                normalized.push('.');
            } else {
                normalized.push(c);
            }
        }

        if !is_plain_decimal(&normalized) {
            return Err(error());
        }
        let normalized = with_bare_point_padded(&normalized);
        let parsed = if normalized.contains(['e', 'E']) {
            Decimal::from_scientific(&normalized)
        } else {
            Decimal::from_str_exact(&normalized)
        };
        parsed.map_err(|_| error())
    }

    fn format_decimal(&self, value: Decimal, locale: &Locale) -> String {
        let fallback = NumberSymbols::new(".", ",");
        let symbols = self.lookup(locale).unwrap_or(&fallback);

        // normalize() drops trailing zeros and the sign of zero
        let rounded = value
            .round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointNearestEven)
            .normalize()
            .to_string();
        let (sign, digits) = match rounded.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rounded.as_str()),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

        let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 * 3);
        out.push_str(sign);
        let len = int_part.len();
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&symbols.group);
            }
            out.push(c);
        }
        if !frac_part.is_empty() {
            out.push_str(&symbols.decimal);
            out.push_str(frac_part);
        }
        out
    }
}

/// Pads `.5` to `0.5` and `5.` to `5.0`.
fn with_bare_point_padded(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut prev: Option<char> = None;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '.' {
            if !prev.is_some_and(|p| p.is_ascii_digit()) {
                out.push('0');
            }
            out.push('.');
            if !chars.peek().is_some_and(|n| n.is_ascii_digit()) {
                out.push('0');
            }
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// `[+-]digits[.digits][e[+-]digits]` with at least one mantissa digit.
fn is_plain_decimal(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_digits) || !all_digits(frac_digits) {
        return false;
    }
    if int_digits.is_empty() && frac_digits.is_empty() {
        return false;
    }

    match exponent {
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
        None => true,
    }
}
