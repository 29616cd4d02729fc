use crate::core::types::ParsedError;
use regex::Regex;

/// Predicate used by the pattern registry and the categorizer fallbacks.
///
/// Rules are evaluated as ordered lists and the first hit wins, so list
/// order is part of a rule set's meaning.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// Regex tried against the message, then against the verbatim input
    Signature(Regex),
    /// Exact error class name
    ErrorName(&'static str),
    /// Regex tried against the message only
    Keyword(Regex),
}

impl MatchRule {
    /// Compile a signature rule. Returns `None` when the pattern is invalid.
    pub fn signature(pattern: &str) -> Option<Self> {
        compile(pattern).map(MatchRule::Signature)
    }

    /// Compile a case-insensitive keyword rule.
    pub fn keyword(pattern: &str) -> Option<Self> {
        compile(&format!("(?i){pattern}")).map(MatchRule::Keyword)
    }

    pub fn matches(&self, error: &ParsedError) -> bool {
        match self {
            MatchRule::Signature(re) => {
                re.is_match(&error.message) || re.is_match(&error.original_text)
            }
            MatchRule::ErrorName(name) => error.name == *name,
            MatchRule::Keyword(re) => re.is_match(&error.message),
        }
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("Invalid match rule pattern {:?}: {}", pattern, e);
            None
        }
    }
}
