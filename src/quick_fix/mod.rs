pub mod confidence;
pub mod engine;
pub mod rules;
pub mod suggestions;

pub use confidence::{ConfidenceScore, ConfidenceThreshold};
pub use engine::{FileBackup, FixApplicationEngine, FixResult};
pub use rules::FixRule;
pub use suggestions::SuggestionGenerator;
