// Integration test modules
pub mod analysis_tests;
pub mod diagnostics_tests;
pub mod engine_tests;
pub mod property_tests;
pub mod quick_fix_tests;

// Test utilities
use faultline::core::types::{AnalysisContext, ErrorAnalysis, ErrorInput};
use faultline::ErrorAnalyzer;

/// Trace whose outermost frame is library code and whose second frame is user code
pub const LIBRARY_THEN_USER_TRACE: &str = "\
TypeError: Cannot read properties of undefined (reading 'id')
    at Object.get (/app/node_modules/lodash/get.js:10:5)
    at loadUser (/app/src/users.js:42:13)
    at node:internal/process/task_queues:95:5";

pub fn analyze(text: &str) -> ErrorAnalysis {
    ErrorAnalyzer::new().analyze(&ErrorInput::from(text), None)
}

pub fn analyze_with(text: &str, context: &AnalysisContext) -> ErrorAnalysis {
    ErrorAnalyzer::new().analyze(&ErrorInput::from(text), Some(context))
}
