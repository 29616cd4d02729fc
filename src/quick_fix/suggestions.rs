use super::confidence::ConfidenceScore;
use super::rules::FixRule;
use crate::analyzers::base::{AnalyzerBase, MessagePatterns};
use crate::core::constants::{commands, confidence};
use crate::core::types::{
    AnalysisContext, CodeFix, ErrorCategory, ParsedError, RecoverySuggestion, SuggestionKind,
};
use crate::patterns::ErrorPattern;
use uuid::Uuid;

const PRIORITY_SPECIFIC_INSTALL: u32 = 1;
const PRIORITY_CATEGORY: u32 = 2;
const PRIORITY_COMMAND_BLOCK: u32 = 3;
const PRIORITY_FALLBACK: u32 = 5;
const CATEGORY_CONFIDENCE: f32 = 0.6;
const SPECIFIC_INSTALL_CONFIDENCE: f32 = 0.9;
const FALLBACK_CONFIDENCE: f32 = 0.3;

fn suggestion(
    title: impl Into<String>,
    description: impl Into<String>,
    priority: u32,
    kind: SuggestionKind,
    confidence: f32,
) -> RecoverySuggestion {
    RecoverySuggestion {
        id: Uuid::new_v4().to_string(),
        title: title.into(),
        description: description.into(),
        priority,
        kind,
        auto_fixable: false,
        fix: None,
        commands: None,
        steps: None,
        confidence: ConfidenceScore::new(confidence).value(),
    }
}

fn with_commands(mut s: RecoverySuggestion, commands: Vec<String>) -> RecoverySuggestion {
    s.auto_fixable = true;
    s.commands = Some(commands);
    s
}

fn with_steps(mut s: RecoverySuggestion, steps: &[&str]) -> RecoverySuggestion {
    s.steps = Some(steps.iter().map(|step| step.to_string()).collect());
    s
}

/// Builds the ranked recovery list for one analyzed error.
pub struct SuggestionGenerator;

impl AnalyzerBase for SuggestionGenerator {}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Pattern remedies, then the category block, then a synthesized code fix
    /// at the front. Sorted by priority, stable for ties. Never empty.
    pub fn generate(
        &self,
        error: &ParsedError,
        category: ErrorCategory,
        pattern: Option<&ErrorPattern>,
        context: Option<&AnalysisContext>,
    ) -> Vec<RecoverySuggestion> {
        let mut suggestions = Vec::new();

        if let Some(pattern) = pattern {
            self.suggest_pattern_solutions(pattern, &mut suggestions);
        }
        self.suggest_category_fixes(error, category, &mut suggestions);

        if let Some(fix) = self.synthesize_code_fix(error, context) {
            suggestions.insert(0, fix);
        }

        if suggestions.is_empty() {
            suggestions.push(Self::fallback());
        }

        suggestions.sort_by_key(|s| s.priority);
        suggestions
    }

    fn suggest_pattern_solutions(
        &self,
        pattern: &ErrorPattern,
        suggestions: &mut Vec<RecoverySuggestion>,
    ) {
        for (i, solution) in pattern.solutions.iter().enumerate() {
            suggestions.push(suggestion(
                *solution,
                format!("Known remedy for {}", pattern.name),
                i as u32 + 1,
                SuggestionKind::ManualAction,
                ConfidenceScore::for_solution(i).value(),
            ));
        }
    }

    fn suggest_category_fixes(
        &self,
        error: &ParsedError,
        category: ErrorCategory,
        suggestions: &mut Vec<RecoverySuggestion>,
    ) {
        match category {
            ErrorCategory::Dependency => {
                let package = MessagePatterns::extract_module_name(&error.message)
                    .and_then(|module| MessagePatterns::package_name(&module));
                if let Some(package) = package {
                    suggestions.push(with_commands(
                        suggestion(
                            format!("Install {package}"),
                            format!("The module '{package}' could not be resolved"),
                            PRIORITY_SPECIFIC_INSTALL,
                            SuggestionKind::DependencyUpdate,
                            SPECIFIC_INSTALL_CONFIDENCE,
                        ),
                        vec![format!("{} {package}", commands::NPM_INSTALL)],
                    ));
                }
                suggestions.push(with_commands(
                    suggestion(
                        "Install missing dependencies",
                        "Reinstall the project's declared dependencies",
                        PRIORITY_CATEGORY,
                        SuggestionKind::DependencyUpdate,
                        CATEGORY_CONFIDENCE,
                    ),
                    vec![commands::NPM_INSTALL.to_string()],
                ));
            }
            ErrorCategory::Type => suggestions.push(with_steps(
                suggestion(
                    "Add a type guard or assertion",
                    "Narrow the value's type before it is used",
                    PRIORITY_CATEGORY,
                    SuggestionKind::CodeFix,
                    CATEGORY_CONFIDENCE,
                ),
                &[
                    "Check the value for null or undefined before accessing it",
                    "Use optional chaining (?.) or nullish coalescing (??)",
                    "Add an explicit type annotation or assertion where the type is known",
                ],
            )),
            ErrorCategory::Network => suggestions.push(with_steps(
                suggestion(
                    "Add error handling and retry",
                    "Network calls can fail transiently and should be retried",
                    PRIORITY_CATEGORY,
                    SuggestionKind::CodeFix,
                    CATEGORY_CONFIDENCE,
                ),
                &[
                    "Wrap the request in try/catch",
                    "Retry with exponential backoff",
                    "Verify the endpoint URL and that the service is reachable",
                ],
            )),
            ErrorCategory::Database => suggestions.push(with_steps(
                suggestion(
                    "Check the database connection",
                    "The database rejected the query or is unreachable",
                    PRIORITY_CATEGORY,
                    SuggestionKind::ConfigChange,
                    CATEGORY_CONFIDENCE,
                ),
                &[
                    "Verify the connection string and credentials",
                    "Confirm the database server is running",
                    "Check that migrations have been applied",
                ],
            )),
            ErrorCategory::Authentication => suggestions.push(with_steps(
                suggestion(
                    "Refresh credentials and re-authenticate",
                    "The request was made with missing, invalid or expired credentials",
                    PRIORITY_CATEGORY,
                    SuggestionKind::ManualAction,
                    CATEGORY_CONFIDENCE,
                ),
                &[
                    "Check that the token or API key is present",
                    "Refresh the session or token if it has expired",
                    "Log in again and retry the request",
                ],
            )),
            ErrorCategory::Build => suggestions.push(with_commands(
                suggestion(
                    "Clean caches and rebuild",
                    "Stale build artifacts can break an otherwise valid build",
                    PRIORITY_COMMAND_BLOCK,
                    SuggestionKind::ManualAction,
                    CATEGORY_CONFIDENCE,
                ),
                vec![
                    commands::CLEAN_CACHES.to_string(),
                    commands::REBUILD.to_string(),
                ],
            )),
            ErrorCategory::Memory => suggestions.push(with_commands(
                suggestion(
                    "Raise the Node.js memory limit",
                    "The process exhausted its heap",
                    PRIORITY_COMMAND_BLOCK,
                    SuggestionKind::ConfigChange,
                    CATEGORY_CONFIDENCE,
                ),
                vec![commands::RAISE_HEAP.to_string()],
            )),
            _ => {}
        }
    }

    /// Needs source text, a file and a line; otherwise nothing is proposed.
    fn synthesize_code_fix(
        &self,
        error: &ParsedError,
        context: Option<&AnalysisContext>,
    ) -> Option<RecoverySuggestion> {
        let code = context?.code.as_deref()?;
        let file = error.file.as_deref()?;
        let line_no = error.line?;
        let line = self.source_line(code, line_no)?;

        let (rule, new_code) = FixRule::first_applicable(line, &error.message)?;
        tracing::debug!(rule = rule.name(), file, line = line_no, "synthesized code fix");

        let mut fix = suggestion(
            rule.title(),
            rule.explanation(),
            0,
            SuggestionKind::CodeFix,
            confidence::SYNTHESIZED_FIX,
        );
        fix.auto_fixable = true;
        fix.fix = Some(CodeFix {
            file: file.to_string(),
            line: line_no,
            old_code: line.to_string(),
            new_code,
            explanation: rule.explanation().to_string(),
        });
        Some(fix)
    }

    fn fallback() -> RecoverySuggestion {
        with_steps(
            suggestion(
                "Investigate the error manually",
                "No known remedy matched this error",
                PRIORITY_FALLBACK,
                SuggestionKind::ManualAction,
                FALLBACK_CONFIDENCE,
            ),
            &[
                "Read the full stack trace and locate the first frame in your code",
                "Reproduce the error with the smallest possible input",
                "Search the exact error message in the project's issue tracker",
            ],
        )
    }
}
