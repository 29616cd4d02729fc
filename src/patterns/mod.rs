pub mod registry;
pub mod rules;

pub use registry::{find_match, get_pattern, patterns, ErrorPattern, PATTERN_REGISTRY};
pub use rules::MatchRule;
