use crate::core::types::{ErrorCategory, ParsedError};
use crate::patterns::{self, ErrorPattern, MatchRule};
use once_cell::sync::Lazy;

/// Error class names with a fixed category
const NAME_TABLE: &[(&str, ErrorCategory)] = &[
    ("SyntaxError", ErrorCategory::Syntax),
    ("TypeError", ErrorCategory::Type),
    ("ReferenceError", ErrorCategory::Runtime),
    ("RangeError", ErrorCategory::Runtime),
    ("EvalError", ErrorCategory::Runtime),
    ("URIError", ErrorCategory::Runtime),
    ("NetworkError", ErrorCategory::Network),
    ("FetchError", ErrorCategory::Network),
    ("TimeoutError", ErrorCategory::Timeout),
    ("AbortError", ErrorCategory::Timeout),
];

/// Ordered message clues, consulted after the name table
const CLUE_TABLE: &[(&str, ErrorCategory)] = &[
    (r"\bsyntax\b|\bparse\b|\bparsing\b|unexpected token", ErrorCategory::Syntax),
    (r"\bundefined\b|\bnull\b|\bproperty\b", ErrorCategory::Type),
    (r"\bnetwork\b|\bfetch\b|\bcors\b", ErrorCategory::Network),
    (r"\bdatabase\b|\bquery\b|\bsql\b", ErrorCategory::Database),
    (r"\bauth\w*|\btoken\b|\blogin\b", ErrorCategory::Authentication),
    (r"\bpermission\b|\bforbidden\b", ErrorCategory::Permission),
    (r"\btime(?:d ?)?out\b", ErrorCategory::Timeout),
    (r"\bmemory\b|\bheap\b", ErrorCategory::Memory),
    (r"\bbuild\b|\bcompil\w*", ErrorCategory::Build),
    (r"\bdeploy\w*|\bserver\b|\bhost\b", ErrorCategory::Deployment),
    (r"\bconfig\w*|\benv\b|\benvironment\b", ErrorCategory::Configuration),
    (r"\bpackage\b|\bmodule\b|\bimport\b", ErrorCategory::Dependency),
];

/// Name rules followed by clue rules, in precedence order
static FALLBACK_RULES: Lazy<Vec<(MatchRule, ErrorCategory)>> = Lazy::new(|| {
    let names = NAME_TABLE
        .iter()
        .map(|(name, category)| (MatchRule::ErrorName(name), *category));
    let clues = CLUE_TABLE
        .iter()
        .filter_map(|(clue, category)| MatchRule::keyword(clue).map(|rule| (rule, *category)));
    names.chain(clues).collect()
});

/// Outcome of categorization
#[derive(Debug, Clone, Copy)]
pub struct Categorization {
    pub category: ErrorCategory,
    pub pattern: Option<&'static ErrorPattern>,
}

/// Assigns a category by registry signature, then error name, then message clues.
pub struct Categorizer;

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Categorizer {
    pub fn new() -> Self {
        Self
    }

    pub fn categorize(&self, error: &ParsedError) -> Categorization {
        if let Some(pattern) = patterns::find_match(error) {
            tracing::debug!(pattern = pattern.id, category = %pattern.category, "matched registry pattern");
            return Categorization {
                category: pattern.category,
                pattern: Some(pattern),
            };
        }

        let category = FALLBACK_RULES
            .iter()
            .find(|(rule, _)| rule.matches(error))
            .map(|(_, category)| *category)
            .unwrap_or(ErrorCategory::Unknown);

        tracing::debug!(%category, name = %error.name, "categorized without pattern");
        Categorization {
            category,
            pattern: None,
        }
    }
}
