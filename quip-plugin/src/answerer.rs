use crate::{Context, Query, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single textual result for a recognized query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    answer: String,
}

impl Answer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.answer
    }

    pub fn into_string(self) -> String {
        self.answer
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.answer)
    }
}

/// Metadata the host uses to build help and documentation pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswererInfo {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub examples: Vec<String>,
}

/// How the leading query token is compared against an answerer's keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordMatch {
    #[default]
    Exact,
    CaseInsensitive,
}

/// Core trait that all answerers must implement.
///
/// Answerers are registered once at start-up and shared read-only between
/// requests, so implementations must not keep per-query state.
pub trait Answerer: Send + Sync {
    /// Display name of the answerer family.
    fn name(&self) -> &str;

    /// One-line human-readable description.
    fn description(&self) -> &str;

    /// Leading keywords this answerer responds to.
    fn keywords(&self) -> Vec<&str>;

    /// Example queries shown in help pages.
    fn examples(&self) -> Vec<String>;

    fn keyword_match(&self) -> KeywordMatch {
        KeywordMatch::Exact
    }

    /// Whether the answerer only answers on the first result page.
    fn first_page_only(&self) -> bool {
        false
    }

    /// Compute the answer for a query whose keyword matched.
    fn answer(&self, query: &Query<'_>, ctx: &Context<'_>) -> Result<Answer>;

    fn info(&self) -> AnswererInfo {
        AnswererInfo {
            name: self.name().to_string(),
            description: self.description().to_string(),
            keywords: self.keywords().into_iter().map(str::to_string).collect(),
            examples: self.examples(),
        }
    }
}
