use crate::core::constants::error_names;
use crate::core::types::{ErrorCategory, ParsedError, Severity};

/// Fixed decision table from category and error shape to severity.
///
/// Checked top to bottom, first hit wins. Pure: the same input always yields
/// the same tier.
pub struct SeverityAssessor;

impl SeverityAssessor {
    pub fn assess(category: ErrorCategory, error: &ParsedError) -> Severity {
        let message = error.message.to_lowercase();

        if matches!(
            category,
            ErrorCategory::Authentication | ErrorCategory::Permission | ErrorCategory::Database
        ) || message.contains("security")
            || message.contains("credential")
        {
            Severity::Critical
        } else if matches!(
            category,
            ErrorCategory::Build | ErrorCategory::Deployment | ErrorCategory::Memory
        ) || error.name == error_names::TYPE_ERROR
        {
            Severity::High
        } else if matches!(
            category,
            ErrorCategory::Runtime | ErrorCategory::Network | ErrorCategory::Type
        ) {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}
