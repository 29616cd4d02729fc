//! # Property Tests
//!
//! Universal guarantees of the analysis output over arbitrary input text.

use super::analyze_with;
use faultline::core::types::{AnalysisContext, ErrorCategory};
use faultline::ErrorAnalyzer;
use proptest::prelude::*;

/// Error text built from realistic fragments so rules actually fire
fn error_text() -> impl Strategy<Value = String> {
    let names = prop::sample::select(vec![
        "Error",
        "TypeError",
        "SyntaxError",
        "ReferenceError",
        "RangeError",
        "FetchError",
        "CustomException",
    ]);
    let messages = prop::sample::select(vec![
        "Cannot find module 'react-dom/client'",
        "Cannot read properties of undefined (reading 'map')",
        "x is not a function",
        "Type 'string' is not assignable to type 'number'",
        "await is only valid in async functions",
        "connect ECONNREFUSED 127.0.0.1:6379",
        "JavaScript heap out of memory",
        "Unexpected token '<'",
        "permission denied",
        "Promise rejected",
        "something went wrong",
    ]);
    let frames = prop::collection::vec(
        prop::sample::select(vec![
            "    at handler (/srv/app/src/routes.js:12:7)",
            "    at Module._compile (node:internal/modules/cjs/loader:1256:14)",
            "    at next (/srv/app/node_modules/express/lib/router/route.js:144:13)",
            "    at /srv/app/src/index.ts:3:1",
            "garbage line",
        ]),
        0..4,
    );
    (names, messages, frames).prop_map(|(name, message, frames)| {
        let mut text = format!("{name}: {message}");
        for frame in frames {
            text.push('\n');
            text.push_str(frame);
        }
        text
    })
}

fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("const total = items.length;".to_string()),
        Just("const data = fetchData();".to_string()),
        Just("let count: number = input;".to_string()),
        Just("await save(record);".to_string()),
        Just("return value;".to_string()),
        "[ -~]{0,40}",
    ]
}

proptest! {
    #[test]
    fn test_invariants_hold_for_any_text(text in ".{0,200}") {
        let analysis = ErrorAnalyzer::new().analyze(&text.as_str().into(), None);

        prop_assert!(ErrorCategory::ALL.contains(&analysis.category));
        prop_assert!((0.0..=1.0).contains(&analysis.root_cause.confidence));
        prop_assert!(!analysis.suggestions.is_empty());
    }

    #[test]
    fn test_invariants_hold_with_context(text in error_text(), line in source_line()) {
        let context = AnalysisContext::new()
            .with_file("src/app.ts")
            .with_line(1)
            .with_code(line);
        let analysis = analyze_with(&text, &context);

        prop_assert!(ErrorCategory::ALL.contains(&analysis.category));
        prop_assert!((0.0..=1.0).contains(&analysis.root_cause.confidence));
        for suggestion in &analysis.suggestions {
            prop_assert!((0.0..=1.0).contains(&suggestion.confidence));
        }
        prop_assert!(analysis
            .suggestions
            .windows(2)
            .all(|w| w[0].priority <= w[1].priority));
        prop_assert_eq!(
            analysis.auto_fix_available,
            analysis.suggestions.iter().any(|s| s.auto_fixable)
        );
        if let Some(fix) = analysis.code_fix() {
            prop_assert_eq!(fix.line, 1);
            prop_assert_ne!(&fix.old_code, &fix.new_code);
            prop_assert!(!fix.new_code.contains('\n'));
        }
    }

    #[test]
    fn test_analysis_is_deterministic(text in error_text()) {
        let first = analyze_with(&text, &AnalysisContext::new());
        let second = analyze_with(&text, &AnalysisContext::new());

        prop_assert_eq!(first.category, second.category);
        prop_assert_eq!(first.severity, second.severity);
        prop_assert_eq!(&first.root_cause, &second.root_cause);
        prop_assert_eq!(first.suggestions.len(), second.suggestions.len());
    }
}
