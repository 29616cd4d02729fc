pub mod base;
pub mod categorizer;
pub mod documentation;
pub mod pipeline;
pub mod root_cause;
pub mod severity;

pub use base::{AnalyzerBase, MessagePatterns};
pub use categorizer::{Categorization, Categorizer};
pub use documentation::DocumentationLinker;
pub use pipeline::ErrorAnalyzer;
pub use root_cause::RootCauseAnalyzer;
pub use severity::SeverityAssessor;
