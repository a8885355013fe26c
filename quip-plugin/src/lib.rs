//! quip-plugin - Answerer abstraction for quip
//!
//! An answerer recognizes a keyword-prefixed query and synthesizes a single
//! textual [`Answer`] for it. This crate holds the pieces every answerer and
//! host share:
//! - The [`Answerer`] trait and its metadata ([`AnswererInfo`])
//! - Query tokenization ([`Query`]) and the per-request [`Context`]
//! - Locale identifiers and the [`NumberLocale`] service interface
//! - The keyword [`AnswererRegistry`]

mod answerer;
mod error;
mod locale;
mod query;
mod registry;

pub use answerer::{Answer, Answerer, AnswererInfo, KeywordMatch};
pub use error::{AnswerError, NumberFormatError, Result};
pub use locale::{Locale, NumberLocale};
pub use query::{Context, Query, SearchContext};
pub use registry::AnswererRegistry;
pub use rust_decimal::Decimal;
