use super::base::AnalyzerBase;
use crate::core::constants::{confidence, root_causes};
use crate::core::types::{AnalysisContext, ParsedError, RootCause};
use crate::patterns::ErrorPattern;

/// Combines pattern metadata, stack frames and the offending source line into
/// a single scored explanation.
pub struct RootCauseAnalyzer;

impl AnalyzerBase for RootCauseAnalyzer {}

impl Default for RootCauseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RootCauseAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(
        &self,
        error: &ParsedError,
        pattern: Option<&ErrorPattern>,
        context: Option<&AnalysisContext>,
    ) -> RootCause {
        let mut evidence = Vec::new();

        let (mut description, mut score) = match pattern {
            Some(pattern) => {
                evidence.push(format!("matched pattern: {}", pattern.name));
                let cause = pattern
                    .common_causes
                    .first()
                    .copied()
                    .unwrap_or(root_causes::UNDETERMINED);
                (cause.to_string(), confidence::PATTERN_MATCH)
            }
            None => (
                root_causes::UNDETERMINED.to_string(),
                confidence::NO_PATTERN,
            ),
        };

        if let Some(frame) = error.stack.iter().find(|f| f.is_user_code()) {
            evidence.push(format!(
                "error originated in {} at line {}",
                frame.file, frame.line
            ));
            score += confidence::USER_FRAME_BONUS;
        }

        if let Some(source_line) = self.offending_line(error, context) {
            evidence.push(source_line.trim().to_string());

            // First heuristic wins; the second is never consulted after it
            if self.uses_await_outside_async(source_line) {
                description = root_causes::AWAIT_OUTSIDE_ASYNC.to_string();
                score = confidence::AWAIT_OUTSIDE_ASYNC;
            } else if self.has_unguarded_member_access(source_line) {
                description = root_causes::UNGUARDED_ACCESS.to_string();
                score = confidence::UNGUARDED_ACCESS;
            }
        }

        if let Some(identifier) = self.extract_identifiers(&error.message).into_iter().next() {
            evidence.push(format!("key identifier: {identifier}"));
        }

        let root_cause = RootCause {
            description,
            confidence: self.clamp_confidence(score),
            evidence,
            matched_pattern: pattern.map(|p| p.id.to_string()),
        };
        tracing::debug!(
            confidence = root_cause.confidence,
            evidence = root_cause.evidence.len(),
            "root cause determined"
        );
        root_cause
    }

    /// Source line at the error location, when both code and a line are known.
    fn offending_line<'a>(
        &self,
        error: &ParsedError,
        context: Option<&'a AnalysisContext>,
    ) -> Option<&'a str> {
        let code = context?.code.as_deref()?;
        self.source_line(code, error.line?)
    }
}
