use crate::core::types::{DiagnosticReport, ErrorAnalysis, RecoverySuggestion, Severity};

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🛑",
        Severity::High => "❌",
        Severity::Medium => "⚠️",
        Severity::Low => "ℹ️",
    }
}

/// Render one analysis as a Markdown document.
pub fn render_analysis(analysis: &ErrorAnalysis) -> String {
    let mut lines = Vec::new();
    let error = &analysis.error;

    lines.push(format!(
        "# {} {}: {}",
        severity_icon(analysis.severity),
        error.name,
        error.message
    ));
    lines.push(String::new());
    lines.push(format!("- **Category**: {}", analysis.category));
    lines.push(format!("- **Severity**: {}", analysis.severity));
    if let Some(file) = &error.file {
        let location = match (error.line, error.column) {
            (Some(line), Some(column)) => format!("{file}:{line}:{column}"),
            (Some(line), None) => format!("{file}:{line}"),
            _ => file.clone(),
        };
        lines.push(format!("- **Location**: `{location}`"));
    }
    lines.push(format!(
        "- **Generated**: {}",
        analysis.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(String::new());

    lines.push("## Root Cause".to_string());
    lines.push(format!(
        "{} (confidence {:.0}%)",
        analysis.root_cause.description,
        analysis.root_cause.confidence * 100.0
    ));
    if !analysis.root_cause.evidence.is_empty() {
        lines.push(String::new());
        lines.push("**Evidence:**".to_string());
        for item in &analysis.root_cause.evidence {
            lines.push(format!("- {item}"));
        }
    }
    lines.push(String::new());

    lines.push("## Suggestions".to_string());
    for (i, suggestion) in analysis.suggestions.iter().enumerate() {
        add_suggestion(&mut lines, i + 1, suggestion);
    }

    if !analysis.related_error_ids.is_empty() {
        lines.push("## Related Errors".to_string());
        for id in &analysis.related_error_ids {
            lines.push(format!("- `{id}`"));
        }
        lines.push(String::new());
    }

    if !analysis.documentation.is_empty() {
        lines.push("## Documentation".to_string());
        for link in &analysis.documentation {
            lines.push(format!("- [{}]({})", link.title, link.url));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn add_suggestion(lines: &mut Vec<String>, rank: usize, suggestion: &RecoverySuggestion) {
    let marker = if suggestion.auto_fixable { " (auto-fixable)" } else { "" };
    lines.push(format!("### {rank}. {}{marker}", suggestion.title));
    lines.push(suggestion.description.clone());

    if let Some(fix) = &suggestion.fix {
        lines.push(String::new());
        lines.push(format!("`{}:{}`", fix.file, fix.line));
        lines.push("```diff".to_string());
        lines.push(format!("- {}", fix.old_code));
        lines.push(format!("+ {}", fix.new_code));
        lines.push("```".to_string());
    }

    if let Some(commands) = &suggestion.commands {
        lines.push(String::new());
        lines.push("```sh".to_string());
        lines.extend(commands.iter().cloned());
        lines.push("```".to_string());
    }

    if let Some(steps) = &suggestion.steps {
        lines.push(String::new());
        for (i, step) in steps.iter().enumerate() {
            lines.push(format!("{}. {step}", i + 1));
        }
    }
    lines.push(String::new());
}

/// Render a diagnostics run as a Markdown document.
pub fn render_report(report: &DiagnosticReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# Diagnostics Report - {}", report.project_id));
    lines.push(String::new());
    lines.push(format!(
        "Generated: {}",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(String::new());

    lines.push("## Summary".to_string());
    lines.push(format!("- **Health Score**: {}/100", report.health_score));
    lines.push(format!("- **Errors**: {}", report.errors.len()));
    lines.push(format!("- **Warnings**: {}", report.warnings.len()));
    lines.push(String::new());

    if !report.errors.is_empty() {
        lines.push("## Errors".to_string());
        for analysis in &report.errors {
            lines.push(format!(
                "- {} **{}** {} ({})",
                severity_icon(analysis.severity),
                analysis.category,
                analysis.error.message,
                analysis.root_cause.description
            ));
        }
        lines.push(String::new());
    }

    if !report.warnings.is_empty() {
        lines.push("## Warnings".to_string());
        for warning in &report.warnings {
            lines.push(format!("- {warning}"));
        }
        lines.push(String::new());
    }

    if !report.recommendations.is_empty() {
        lines.push("## Recommendations".to_string());
        for recommendation in &report.recommendations {
            lines.push(format!("- {recommendation}"));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
