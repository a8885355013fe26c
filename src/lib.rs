//! quip - instant answers for keyword-prefixed search queries
//!
//! Recognizes a handful of command grammars at the start of a query and
//! produces a single textual answer without running a search:
//!
//! ```text
//! random uuid             -> 3f0c2a5e-8d3b-4c1e-9f7a-2b6d8e4c1a90
//! avg 2 4                 -> [en] avg(2, 4) = 3
//! dice 2d6                -> 4, 1
//! base 16 FF 2            -> Base 16: FF -> Base 2: 11111111
//! ```
//!
//! Queries that are not commands, or whose arguments do not parse, produce
//! no answer so the host can fall back to a normal search.

pub use quip_core::{Config, ConfigError, Engine, LocaleTable, NumberSymbols};
pub use quip_plugin::{
    Answer, AnswerError, Answerer, AnswererInfo, AnswererRegistry, Context, Decimal, KeywordMatch,
    Locale, NumberLocale, Query, SearchContext,
};

#[cfg(feature = "std")]
pub use quip_std as answerers;

/// An engine with every built-in answerer enabled in `config`.
#[cfg(feature = "std")]
pub fn standard_engine(config: &Config) -> Engine {
    Engine::new(config, quip_std::standard_registry(config))
}
