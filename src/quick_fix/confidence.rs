use crate::core::constants::confidence;
use serde::{Deserialize, Serialize};

/// Confidence score for a root cause or suggestion (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ConfidenceScore(f32);

impl ConfidenceScore {
    pub fn new(score: f32) -> Self {
        if score.is_nan() {
            return Self(0.0);
        }
        Self(score.clamp(0.0, 1.0))
    }

    /// Score for the `index`-th canned solution of a pattern.
    ///
    /// Decays linearly from the base; long solution lists bottom out at 0.
    pub fn for_solution(index: usize) -> Self {
        let step = confidence::SOLUTION_STEP * index as f32;
        Self::new(confidence::SOLUTION_BASE - step)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_at_least(&self, threshold: &ConfidenceThreshold) -> bool {
        self.0 >= threshold.minimum
    }
}

impl From<ConfidenceScore> for f32 {
    fn from(score: ConfidenceScore) -> Self {
        score.0
    }
}

/// Lower bound a caller applies before acting on a suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceThreshold {
    /// Suggestions below this are not offered for application (default: 0.5)
    pub minimum: f32,
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        Self { minimum: 0.5 }
    }
}
