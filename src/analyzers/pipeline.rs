use super::categorizer::Categorizer;
use super::documentation::DocumentationLinker;
use super::root_cause::RootCauseAnalyzer;
use super::severity::SeverityAssessor;
use crate::core::types::{AnalysisContext, ErrorAnalysis, ErrorInput};
use crate::parser::ErrorParser;
use crate::quick_fix::SuggestionGenerator;
use chrono::Utc;
use std::collections::BTreeSet;
use uuid::Uuid;

/// The pure analysis pipeline: parse, categorize, assess, explain, suggest.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
/// Related error ids are left empty; they depend on stored history and are
/// filled in by [`crate::engine::RecoveryEngine`].
pub struct ErrorAnalyzer {
    categorizer: Categorizer,
    root_cause: RootCauseAnalyzer,
    suggestions: SuggestionGenerator,
}

impl Default for ErrorAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorAnalyzer {
    pub fn new() -> Self {
        Self {
            categorizer: Categorizer::new(),
            root_cause: RootCauseAnalyzer::new(),
            suggestions: SuggestionGenerator::new(),
        }
    }

    pub fn analyze(&self, input: &ErrorInput, context: Option<&AnalysisContext>) -> ErrorAnalysis {
        let error = ErrorParser::parse(input, context);
        let categorization = self.categorizer.categorize(&error);
        let category = categorization.category;
        let pattern = categorization.pattern;

        let severity = SeverityAssessor::assess(category, &error);
        let root_cause = self.root_cause.analyze(&error, pattern, context);
        let suggestions = self.suggestions.generate(&error, category, pattern, context);
        let documentation = DocumentationLinker::links_for(category);
        let auto_fix_available = suggestions.iter().any(|s| s.auto_fixable);

        tracing::debug!(
            %category,
            %severity,
            suggestions = suggestions.len(),
            auto_fix_available,
            "analysis complete"
        );

        ErrorAnalysis {
            id: Uuid::new_v4().to_string(),
            error,
            category,
            severity,
            root_cause,
            suggestions,
            related_error_ids: BTreeSet::new(),
            documentation,
            auto_fix_available,
            created_at: Utc::now(),
        }
    }
}
