use crate::{Locale, NumberLocale};

/// A raw query split into whitespace-separated parts.
///
/// The query itself is never modified; answerers slice their own argument
/// tail out of [`Query::args`].
#[derive(Debug, Clone)]
pub struct Query<'a> {
    raw: &'a str,
    parts: Vec<&'a str>,
}

impl<'a> Query<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            parts: raw.split_whitespace().collect(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn parts(&self) -> &[&'a str] {
        &self.parts
    }

    /// The leading token, if any.
    pub fn keyword(&self) -> Option<&'a str> {
        self.parts.first().copied()
    }

    /// Everything after the keyword.
    pub fn args(&self) -> &[&'a str] {
        self.parts.get(1..).unwrap_or_default()
    }
}

/// Request state the host hands in alongside the query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    pub locale: Locale,
    pub pageno: u32,
}

impl SearchContext {
    pub fn new(locale: Locale) -> Self {
        Self { locale, pageno: 1 }
    }

    pub fn with_page(mut self, pageno: u32) -> Self {
        self.pageno = pageno;
        self
    }

    pub fn is_first_page(&self) -> bool {
        self.pageno <= 1
    }
}

/// What an answerer sees while computing an answer.
///
/// `locale` has already been resolved against the number service, so
/// answerers can use it for parsing and formatting without further checks.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub locale: &'a Locale,
    pub numbers: &'a dyn NumberLocale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_splits_on_any_whitespace() {
        let query = Query::new("  avg 1\t2\n 3 ");
        assert_eq!(query.keyword(), Some("avg"));
        assert_eq!(query.args(), &["1", "2", "3"]);
        assert_eq!(query.raw(), "  avg 1\t2\n 3 ");
    }

    #[test]
    fn test_empty_query_has_no_keyword() {
        let query = Query::new("   ");
        assert_eq!(query.keyword(), None);
        assert!(query.args().is_empty());
    }

    #[test]
    fn test_first_page() {
        let ctx = SearchContext::new("en".parse().unwrap());
        assert!(ctx.is_first_page());
        assert!(!ctx.with_page(2).is_first_page());
    }
}
