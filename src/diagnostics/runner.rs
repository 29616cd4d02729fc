use super::checks::{DiagnosticCheck, Finding};
use crate::analyzers::ErrorAnalyzer;
use crate::core::config::{DiagnosticsConfig, HasDiagnosticsConfig};
use crate::core::types::{
    AnalysisContext, DiagnosticReport, ErrorAnalysis, ErrorCategory, ErrorInput,
};
use chrono::Utc;
use uuid::Uuid;

const MAX_HEALTH: u8 = 100;

mod recommendations {
    pub const COMPREHENSIVE_REVIEW: &str = "Schedule a comprehensive code review";
    pub const STRICT_TYPES: &str = "Enable strict type checking";
    pub const ERROR_BOUNDARIES: &str = "Add error boundaries around failure-prone code";
    pub const STRUCTURED_LOGGER: &str = "Adopt a structured logger instead of console output";
    pub const TRACK_TODOS: &str = "Convert TODO comments into tracked issues";
    pub const SECRET_STORAGE: &str = "Move credentials into environment variables or a secret manager";
}

/// Batch scanner producing a [`DiagnosticReport`] for a block of source text.
pub struct DiagnosticsRunner<'a> {
    analyzer: &'a ErrorAnalyzer,
    config: DiagnosticsConfig,
}

impl<'a> DiagnosticsRunner<'a> {
    pub fn new(analyzer: &'a ErrorAnalyzer, config: &impl HasDiagnosticsConfig) -> Self {
        Self {
            analyzer,
            config: config.diagnostics_config().clone(),
        }
    }

    /// Scan `source` with every check, in checklist order.
    ///
    /// `files` only names where the text came from; matching ignores it.
    pub fn run(&self, project_id: &str, source: &str, files: &[String]) -> DiagnosticReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut warned = Vec::new();
        let mut penalty: u32 = 0;

        for check in DiagnosticCheck::ALL {
            for finding in check.scan(source) {
                match finding {
                    Finding::Warning { check, message } => {
                        penalty += u32::from(self.config.warning_penalty);
                        warned.push(check);
                        warnings.push(message);
                    }
                    Finding::Secret { key } => {
                        penalty += u32::from(self.config.secret_penalty);
                        errors.push(self.analyze_secret(project_id, &key, files));
                    }
                }
            }
        }

        let health_score = u32::from(MAX_HEALTH).saturating_sub(penalty) as u8;
        let recommendations = self.recommend(&errors, &warned);

        tracing::info!(
            project_id,
            files = files.len(),
            errors = errors.len(),
            warnings = warnings.len(),
            health_score,
            "diagnostics complete"
        );

        DiagnosticReport {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            timestamp: Utc::now(),
            errors,
            warnings,
            health_score,
            recommendations,
        }
    }

    fn analyze_secret(&self, project_id: &str, key: &str, files: &[String]) -> ErrorAnalysis {
        let message = format!("SecurityError: Hardcoded credential detected: '{key}' is assigned a literal value");
        let mut context = AnalysisContext::new().with_project(project_id);
        if let [only] = files {
            context = context.with_file(only.clone());
        }
        self.analyzer.analyze(&ErrorInput::from(message), Some(&context))
    }

    fn recommend(&self, errors: &[ErrorAnalysis], warned: &[DiagnosticCheck]) -> Vec<String> {
        let has_category = |category: ErrorCategory| errors.iter().any(|e| e.category == category);

        let candidates = [
            (
                errors.len() > self.config.comprehensive_review_threshold,
                recommendations::COMPREHENSIVE_REVIEW,
            ),
            (has_category(ErrorCategory::Type), recommendations::STRICT_TYPES),
            (has_category(ErrorCategory::Runtime), recommendations::ERROR_BOUNDARIES),
            (
                has_category(ErrorCategory::Authentication),
                recommendations::SECRET_STORAGE,
            ),
            (
                warned.contains(&DiagnosticCheck::DebugPrint),
                recommendations::STRUCTURED_LOGGER,
            ),
            (
                warned.contains(&DiagnosticCheck::UnresolvedTodo),
                recommendations::TRACK_TODOS,
            ),
        ];

        let mut result: Vec<String> = Vec::new();
        for (triggered, recommendation) in candidates {
            if triggered && !result.iter().any(|r| r == recommendation) {
                result.push(recommendation.to_string());
            }
        }
        result
    }
}
