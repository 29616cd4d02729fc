//! # Analysis Pipeline Tests
//!
//! End-to-end checks of parse, categorize, explain and suggest on realistic
//! error text.

use super::{analyze, analyze_with, LIBRARY_THEN_USER_TRACE};
use faultline::core::types::{AnalysisContext, ErrorCategory, ErrorInput, Severity, SuggestionKind};
use faultline::ErrorAnalyzer;
use test_case::test_case;

#[test]
fn test_missing_module_extracts_package() {
    let analysis = analyze("Error: Cannot find module 'lodash'");

    assert_eq!(analysis.category, ErrorCategory::Dependency);
    assert_eq!(analysis.root_cause.matched_pattern.as_deref(), Some("module_not_found"));

    let install = analysis
        .suggestions
        .iter()
        .find(|s| {
            s.commands
                .as_ref()
                .is_some_and(|cmds| cmds.iter().any(|c| c == "npm install lodash"))
        })
        .expect("specific install suggestion");
    assert_eq!(install.kind, SuggestionKind::DependencyUpdate);
    assert!(install.auto_fixable);
    assert!(analysis.auto_fix_available);
}

#[test]
fn test_optional_chaining_fix_synthesized() {
    let context = AnalysisContext::new()
        .with_file("src/profile.ts")
        .with_line(1)
        .with_code("user.name");
    let analysis = analyze_with(
        "TypeError: Cannot read properties of undefined (reading 'name')",
        &context,
    );

    let first = &analysis.suggestions[0];
    assert_eq!(first.priority, 0);
    assert!(first.auto_fixable);
    assert_eq!(first.confidence, 0.8);

    let fix = first.fix.as_ref().expect("synthesized fix");
    assert_eq!(fix.file, "src/profile.ts");
    assert_eq!(fix.line, 1);
    assert_eq!(fix.old_code, "user.name");
    assert_eq!(fix.new_code, "user?.name");
    assert_eq!(analysis.code_fix(), Some(fix));
}

#[test]
fn test_evidence_points_at_first_user_frame() {
    let analysis = analyze(LIBRARY_THEN_USER_TRACE);

    assert_eq!(analysis.error.stack.len(), 3);
    assert!(analysis.error.stack[0].is_library);
    assert!(analysis.error.stack[2].is_internal);

    let origin: Vec<_> = analysis
        .root_cause
        .evidence
        .iter()
        .filter(|e| e.starts_with("error originated in"))
        .collect();
    assert_eq!(origin, vec!["error originated in /app/src/users.js at line 42"]);
    assert!(analysis
        .root_cause
        .evidence
        .contains(&"key identifier: id".to_string()));
}

#[test]
fn test_exception_input_matches_text_input() {
    let from_text = analyze("TypeError: x is not a function\n    at run (/app/src/run.js:3:1)");
    let from_exception = ErrorAnalyzer::new().analyze(
        &ErrorInput::Exception {
            name: "TypeError".to_string(),
            message: "x is not a function".to_string(),
            stack: Some("    at run (/app/src/run.js:3:1)".to_string()),
        },
        None,
    );

    assert_eq!(from_text.category, from_exception.category);
    assert_eq!(from_text.severity, from_exception.severity);
    assert_eq!(from_text.root_cause, from_exception.root_cause);
    assert_eq!(from_text.error.file, from_exception.error.file);
}

#[test]
fn test_repeated_analysis_is_deterministic() {
    let text = "SyntaxError: Unexpected token '}'";
    let first = analyze(text);
    let second = analyze(text);

    assert_ne!(first.id, second.id);
    assert_eq!(first.category, second.category);
    assert_eq!(first.severity, second.severity);
    assert_eq!(first.root_cause.description, second.root_cause.description);
    let titles = |a: &faultline::ErrorAnalysis| {
        a.suggestions.iter().map(|s| s.title.clone()).collect::<Vec<_>>()
    };
    assert_eq!(titles(&first), titles(&second));
}

#[test]
fn test_garbage_input_degrades_gracefully() {
    let analysis = analyze("???");

    assert_eq!(analysis.error.name, "Error");
    assert_eq!(analysis.error.message, "???");
    assert!(analysis.error.stack.is_empty());
    assert_eq!(analysis.category, ErrorCategory::Unknown);
    assert_eq!(analysis.severity, Severity::Low);
    assert_eq!(analysis.root_cause.description, "unable to determine root cause");
    assert!(!analysis.suggestions.is_empty());
    assert!(analysis.documentation.is_empty());
}

#[test_case("Error: Cannot find module 'express'" => ErrorCategory::Dependency)]
#[test_case("SyntaxError: Unexpected end of input" => ErrorCategory::Syntax)]
#[test_case("ReferenceError: foo is not defined" => ErrorCategory::Runtime)]
#[test_case("Error: connect ECONNREFUSED 127.0.0.1:5432" => ErrorCategory::Network)]
#[test_case("FATAL ERROR: Reached heap limit Allocation failed - JavaScript heap out of memory" => ErrorCategory::Memory)]
#[test_case("Error: listen EADDRINUSE: address already in use :::3000" => ErrorCategory::Deployment)]
#[test_case("Error: 401 Unauthorized" => ErrorCategory::Authentication)]
#[test_case("Error: EACCES: permission denied, open '/etc/hosts'" => ErrorCategory::Permission)]
#[test_case("Error: something odd happened" => ErrorCategory::Unknown)]
fn test_categorization(text: &str) -> ErrorCategory {
    analyze(text).category
}

#[test_case("Error: 401 Unauthorized" => Severity::Critical)]
#[test_case("FATAL ERROR: Reached heap limit Allocation failed - JavaScript heap out of memory" => Severity::High)]
#[test_case("ReferenceError: foo is not defined" => Severity::Medium)]
#[test_case("Error: something odd happened" => Severity::Low)]
fn test_severity(text: &str) -> Severity {
    analyze(text).severity
}

#[test]
fn test_documentation_attached_for_type_errors() {
    let analysis = analyze("TypeError: Cannot read properties of null (reading 'x')");
    assert!(!analysis.documentation.is_empty());
    assert!(analysis
        .documentation
        .iter()
        .all(|link| link.url.starts_with("https://") && (0.0..=1.0).contains(&link.relevance)));
}
