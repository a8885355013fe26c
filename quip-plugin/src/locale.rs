use crate::{AnswerError, NumberFormatError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A locale identifier such as `en`, `de_CH` or `zh_Hant_TW`.
///
/// Tags are accepted with either `-` or `_` separators and always displayed
/// with `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    script: Option<String>,
    territory: Option<String>,
}

impl Locale {
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }

    /// Tags to try when resolving locale data, most specific first.
    pub fn fallbacks(&self) -> Vec<String> {
        let mut tags = vec![self.to_string()];
        if self.script.is_some() {
            if let Some(territory) = &self.territory {
                tags.push(format!("{}_{}", self.language, territory));
            }
        }
        if self.script.is_some() || self.territory.is_some() {
            tags.push(self.language.clone());
        }
        tags
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            script: None,
            territory: None,
        }
    }
}

impl FromStr for Locale {
    type Err = AnswerError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let invalid = || AnswerError::InvalidArgument(format!("invalid locale tag '{}'", tag));

        let mut subtags = tag.trim().split(['-', '_']);
        let language = subtags.next().filter(|s| {
            (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
        });
        let language = language.ok_or_else(invalid)?.to_ascii_lowercase();

        let mut script = None;
        let mut territory = None;
        for subtag in subtags {
            let alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            let digits = subtag.chars().all(|c| c.is_ascii_digit());
            match subtag.len() {
                4 if alpha && script.is_none() && territory.is_none() => {
                    let (head, tail) = subtag.split_at(1);
                    script = Some(format!(
                        "{}{}",
                        head.to_ascii_uppercase(),
                        tail.to_ascii_lowercase()
                    ));
                }
                2 if alpha && territory.is_none() => {
                    territory = Some(subtag.to_ascii_uppercase());
                }
                3 if digits && territory.is_none() => territory = Some(subtag.to_string()),
                _ => return Err(invalid()),
            }
        }

        Ok(Self {
            language,
            script,
            territory,
        })
    }
}

impl TryFrom<String> for Locale {
    type Error = AnswerError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "_{}", script)?;
        }
        if let Some(territory) = &self.territory {
            write!(f, "_{}", territory)?;
        }
        Ok(())
    }
}

/// Locale-aware decimal parsing and formatting, provided by the host.
///
/// Values are exact decimals: text that parses must format back to the same
/// digits (up to the formatting pattern's rounding). Implementations must be
/// safe to share between concurrent requests.
pub trait NumberLocale: Send + Sync {
    /// Whether the service has number symbols for this locale.
    fn supports(&self, locale: &Locale) -> bool;

    /// Fails on malformed text and on values a [`Decimal`] cannot hold exactly.
    fn parse_decimal(&self, text: &str, locale: &Locale) -> Result<Decimal, NumberFormatError>;

    fn format_decimal(&self, value: Decimal, locale: &Locale) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_only() {
        let locale: Locale = "EN".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.territory(), None);
        assert_eq!(locale.to_string(), "en");
    }

    #[test]
    fn test_parse_dash_and_underscore() {
        let dashed: Locale = "de-ch".parse().unwrap();
        let underscored: Locale = "de_CH".parse().unwrap();
        assert_eq!(dashed, underscored);
        assert_eq!(dashed.to_string(), "de_CH");
    }

    #[test]
    fn test_parse_script_and_territory() {
        let locale: Locale = "zh-hant-tw".parse().unwrap();
        assert_eq!(locale.script(), Some("Hant"));
        assert_eq!(locale.to_string(), "zh_Hant_TW");
        assert_eq!(locale.fallbacks(), vec!["zh_Hant_TW", "zh_TW", "zh"]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Locale>().is_err());
        assert!("english".parse::<Locale>().is_err());
        assert!("en-US-extra".parse::<Locale>().is_err());
    }

    #[test]
    fn test_serde_uses_tag_form() {
        let locale: Locale = serde_json::from_str("\"pt-BR\"").unwrap();
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"pt_BR\"");
    }
}
