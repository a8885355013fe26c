//! Number base conversion for bases 2 through 64.

use quip_plugin::{Answer, AnswerError, Answerer, Context, KeywordMatch, Query, Result};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Digit symbols in increasing value order.
pub const ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 64;

#[allow(clippy::expect_used)]
static BASE_QUERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(base) (.*)").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("base {base} is outside 2..=64")]
    InvalidBase { base: u32 },

    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
}

impl From<ConvertError> for AnswerError {
    fn from(e: ConvertError) -> Self {
        AnswerError::Convert(e.to_string())
    }
}

fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 36),
        '+' => Some(62),
        '/' => Some(63),
        _ => None,
    }
}

fn check_base(base: u32) -> std::result::Result<(), ConvertError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ConvertError::InvalidBase { base })
    }
}

/// Converts a non-negative number written in `from_base` to `to_base`.
///
/// Works on digit vectors with schoolbook long division, so inputs of any
/// length convert exactly. Zero (including the empty string) always
/// converts to `"0"`.
pub fn convert(
    number: &str,
    from_base: u32,
    to_base: u32,
) -> std::result::Result<String, ConvertError> {
    check_base(from_base)?;
    check_base(to_base)?;

    let mut digits = number
        .chars()
        .map(|c| match digit_value(c) {
            Some(value) if value < from_base => Ok(value),
            _ => Err(ConvertError::InvalidDigit {
                digit: c,
                base: from_base,
            }),
        })
        .collect::<std::result::Result<Vec<u32>, _>>()?;

    let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();
    digits.drain(..leading_zeros);
    if digits.is_empty() {
        return Ok("0".to_string());
    }

    let mut converted = Vec::new();
    while !digits.is_empty() {
        let mut remainder = 0;
        let mut quotient = Vec::with_capacity(digits.len());
        for &digit in &digits {
            let acc = remainder * from_base + digit;
            let q = acc / to_base;
            remainder = acc % to_base;
            if q != 0 || !quotient.is_empty() {
                quotient.push(q);
            }
        }
        converted.push(ALPHABET[remainder as usize] as char);
        digits = quotient;
    }

    Ok(converted.iter().rev().collect())
}

/// Answers `base <from> <number> [to]`; `to` defaults to 10.
pub struct BaseConvertAnswerer;

impl BaseConvertAnswerer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BaseConvertAnswerer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_base(token: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| AnswerError::InvalidArgument(format!("'{}' is not a base", token)))
}

impl Answerer for BaseConvertAnswerer {
    fn name(&self) -> &str {
        "Base Convert"
    }

    fn description(&self) -> &str {
        "Converts numbers between bases 2 to 64."
    }

    fn keywords(&self) -> Vec<&str> {
        vec!["base"]
    }

    fn examples(&self) -> Vec<String> {
        vec!["base 2 101".to_string(), "base 16 FF 2".to_string()]
    }

    fn keyword_match(&self) -> KeywordMatch {
        KeywordMatch::CaseInsensitive
    }

    fn first_page_only(&self) -> bool {
        true
    }

    fn answer(&self, query: &Query<'_>, _ctx: &Context<'_>) -> Result<Answer> {
        let rest = BASE_QUERY_RE
            .captures(query.raw().trim_start())
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                AnswerError::InvalidArgument("expected 'base <from> <number>'".to_string())
            })?;

        let mut data = rest.split_whitespace();
        let missing = || AnswerError::InvalidArgument("missing base or number".to_string());
        let from_token = data.next().ok_or_else(missing)?;
        let number = data.next().ok_or_else(missing)?;
        let to_token = data.next().unwrap_or("10");

        let converted = convert(number, parse_base(from_token)?, parse_base(to_token)?)?;

        Ok(Answer::new(format!(
            "Base {}: {} -> Base {}: {}",
            from_token, number, to_token, converted
        )))
    }
}
