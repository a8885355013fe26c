//! Query dispatch.
//!
//! The engine tokenizes a query, looks up the answerer registered for its
//! leading keyword and runs it. Every failure is reported as a typed
//! [`AnswerError`] by [`Engine::try_dispatch`] and collapsed into "no answer"
//! by [`Engine::dispatch`], so accidental keyword collisions with ordinary
//! searches degrade to a normal search on the host side.

use crate::{config::Config, numbers::LocaleTable};
use quip_plugin::{
    Answer, AnswerError, AnswererInfo, AnswererRegistry, Context, Locale, NumberLocale, Query,
    Result, SearchContext,
};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Main engine coordinating keyword lookup and answering.
///
/// Cloning is cheap; clones share the registry and the number service.
#[derive(Clone)]
pub struct Engine {
    registry: Arc<AnswererRegistry>,
    numbers: Arc<dyn NumberLocale>,
    default_locale: Locale,
}

impl Engine {
    /// Creates an engine that formats numbers with the built-in locale table
    /// plus any `number_formats` from the configuration.
    pub fn new(config: &Config, registry: AnswererRegistry) -> Self {
        let numbers = Arc::new(LocaleTable::with_overrides(&config.number_formats));
        Self::with_numbers(config, registry, numbers)
    }

    /// Creates an engine backed by a host-provided number service.
    pub fn with_numbers(
        config: &Config,
        registry: AnswererRegistry,
        numbers: Arc<dyn NumberLocale>,
    ) -> Self {
        info!(
            answerers = registry.get_count(),
            default_locale = %config.default_locale,
            "answer engine ready"
        );

        Self {
            registry: Arc::new(registry),
            numbers,
            default_locale: config.default_locale.clone(),
        }
    }

    /// Metadata of every registered answerer.
    pub fn answerer_infos(&self) -> Vec<AnswererInfo> {
        self.registry.infos()
    }

    /// Answers a query, or returns `None` when it is not a command the
    /// engine understands or its arguments are invalid.
    pub fn dispatch(&self, query: &str, search: &SearchContext) -> Option<Answer> {
        match self.try_dispatch(query, search) {
            Ok(answer) => Some(answer),
            Err(AnswerError::NoMatch(_)) => {
                trace!(query, "no answerer matched");
                None
            }
            Err(e) => {
                debug!(query, error = %e, "query not answered");
                None
            }
        }
    }

    /// Like [`dispatch`](Self::dispatch) but reports why no answer was produced.
    pub fn try_dispatch(&self, raw: &str, search: &SearchContext) -> Result<Answer> {
        let query = Query::new(raw);
        let keyword = match query.parts() {
            [keyword, _, ..] => *keyword,
            _ => return Err(AnswerError::NoMatch(raw.trim().to_string())),
        };

        let answerer = self
            .registry
            .get(keyword)
            .ok_or_else(|| AnswerError::NoMatch(keyword.to_string()))?;

        if answerer.first_page_only() && !search.is_first_page() {
            return Err(AnswerError::PageGated(search.pageno));
        }

        let ctx = Context {
            locale: self.resolve_locale(&search.locale),
            numbers: self.numbers.as_ref(),
        };
        answerer.answer(&query, &ctx)
    }

    fn resolve_locale<'a>(&'a self, requested: &'a Locale) -> &'a Locale {
        if self.numbers.supports(requested) {
            requested
        } else {
            debug!(
                requested = %requested,
                fallback = %self.default_locale,
                "no number data for locale"
            );
            &self.default_locale
        }
    }
}
