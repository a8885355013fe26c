use crate::{Answerer, AnswererInfo, KeywordMatch};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry for managing answerers.
///
/// The registry is responsible for:
/// - Registering answerers under their keywords
/// - Looking up an answerer by the leading query token
/// - Providing answerer metadata to the host
///
/// It is filled once at start-up and only read afterwards, so it can be
/// shared between threads behind an `Arc` without locking.
#[derive(Default)]
pub struct AnswererRegistry {
    answerers: Vec<Arc<dyn Answerer>>,
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl AnswererRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an answerer under all of its keywords.
    /// Returns false if one of its keywords is already taken; nothing is
    /// registered in that case.
    pub fn register<T: Answerer + 'static>(&mut self, answerer: T) -> bool {
        let keywords = answerer.keywords();
        let match_mode = answerer.keyword_match();

        if let Some(taken) = keywords.iter().find(|k| self.is_taken(k, match_mode)) {
            debug!(
                answerer = answerer.name(),
                keyword = *taken,
                "keyword already registered"
            );
            return false;
        }

        let index = self.answerers.len();
        for keyword in &keywords {
            match match_mode {
                KeywordMatch::Exact => self.exact.insert(keyword.to_string(), index),
                KeywordMatch::CaseInsensitive => {
                    self.folded.insert(keyword.to_lowercase(), index)
                }
            };
        }
        debug!(answerer = answerer.name(), ?keywords, "registered answerer");

        let answerer: Arc<dyn Answerer> = Arc::new(answerer);
        self.answerers.push(answerer);
        true
    }

    /// A case-insensitive keyword also collides with every exact keyword
    /// that folds to it, otherwise lookups would split by letter case.
    fn is_taken(&self, keyword: &str, mode: KeywordMatch) -> bool {
        let folded = keyword.to_lowercase();
        if self.exact.contains_key(keyword) || self.folded.contains_key(&folded) {
            return true;
        }
        mode == KeywordMatch::CaseInsensitive
            && self.exact.keys().any(|k| k.to_lowercase() == folded)
    }

    /// Get the number of answerers in the registry.
    pub fn get_count(&self) -> usize {
        self.answerers.len()
    }

    /// Get the answerer responsible for a leading query token.
    pub fn get(&self, keyword: &str) -> Option<&Arc<dyn Answerer>> {
        self.exact
            .get(keyword)
            .or_else(|| self.folded.get(&keyword.to_lowercase()))
            .map(|&index| &self.answerers[index])
    }

    /// Metadata for every registered answerer, for help pages.
    pub fn infos(&self) -> Vec<AnswererInfo> {
        self.answerers.iter().map(|a| a.info()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, Context, Query, Result};

    struct TestAnswerer {
        keywords: Vec<&'static str>,
        match_mode: KeywordMatch,
    }

    impl TestAnswerer {
        fn exact(keywords: &[&'static str]) -> Self {
            Self {
                keywords: keywords.to_vec(),
                match_mode: KeywordMatch::Exact,
            }
        }
    }

    impl Answerer for TestAnswerer {
        fn name(&self) -> &str {
            "test"
        }

        fn description(&self) -> &str {
            "A test answerer"
        }

        fn keywords(&self) -> Vec<&str> {
            self.keywords.clone()
        }

        fn examples(&self) -> Vec<String> {
            vec!["echo hello".to_string()]
        }

        fn keyword_match(&self) -> KeywordMatch {
            self.match_mode
        }

        fn answer(&self, query: &Query<'_>, _ctx: &Context<'_>) -> Result<Answer> {
            Ok(Answer::new(query.args().join(" ")))
        }
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = AnswererRegistry::new();
        assert!(registry.register(TestAnswerer::exact(&["echo", "say"])));

        assert_eq!(registry.get_count(), 1);
        assert!(registry.get("echo").is_some());
        assert!(registry.get("say").is_some());
        assert!(registry.get("Echo").is_none());
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_registry_case_insensitive_lookup() {
        let mut registry = AnswererRegistry::new();
        registry.register(TestAnswerer {
            keywords: vec!["base"],
            match_mode: KeywordMatch::CaseInsensitive,
        });

        assert!(registry.get("base").is_some());
        assert!(registry.get("BASE").is_some());
    }

    #[test]
    fn test_registry_keyword_collision() {
        let mut registry = AnswererRegistry::new();
        assert!(registry.register(TestAnswerer::exact(&["echo"])));
        assert!(!registry.register(TestAnswerer::exact(&["other", "echo"])));

        assert_eq!(registry.get_count(), 1);
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_registry_collision_across_match_modes() {
        let folding = || TestAnswerer {
            keywords: vec!["BASE"],
            match_mode: KeywordMatch::CaseInsensitive,
        };

        let mut registry = AnswererRegistry::new();
        assert!(registry.register(TestAnswerer::exact(&["base"])));
        assert!(!registry.register(folding()));
        assert_eq!(registry.get_count(), 1);
        assert!(registry.get("Base").is_none());

        let mut registry = AnswererRegistry::new();
        assert!(registry.register(folding()));
        assert!(!registry.register(TestAnswerer::exact(&["Base"])));
        assert_eq!(registry.get_count(), 1);
    }

    #[test]
    fn test_registry_infos() {
        let mut registry = AnswererRegistry::new();
        registry.register(TestAnswerer::exact(&["echo"]));

        let infos = registry.infos();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].name, "test");
        assert_eq!(infos[0].keywords, vec!["echo"]);
        assert_eq!(infos[0].examples, vec!["echo hello"]);
    }
}
