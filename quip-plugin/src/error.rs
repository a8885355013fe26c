use thiserror::Error;

/// Raised by a [`NumberLocale`](crate::NumberLocale) when text is not a
/// number in the requested locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{text}' is not a valid number in locale {locale}")]
pub struct NumberFormatError {
    pub text: String,
    pub locale: String,
}

/// Why an answerer produced no answer.
///
/// The engine swallows every variant into "no answer" for the end user;
/// the variants exist so callers and tests can tell the cases apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("no answerer for query '{0}'")]
    NoMatch(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("answers only on the first result page (page {0} requested)")]
    PageGated(u32),

    #[error(transparent)]
    NumberFormat(#[from] NumberFormatError),

    #[error("conversion failed: {0}")]
    Convert(String),
}

pub type Result<T> = std::result::Result<T, AnswerError>;
