//! SSID match rules

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MATCH_THRESHOLD;

/// Threshold for a watch-list hit.
///
/// A score must be strictly greater than `threshold`; a score equal to it
/// is not a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    pub threshold: u8,
}

impl MatchRules {
    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn is_match(&self, score: u8) -> bool {
        score > self.threshold
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}
