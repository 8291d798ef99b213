use serde::{Deserialize, Serialize};
use std::fmt;

use super::session::TopicStats;

/// How hard the next question on a topic should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Strength at or below which a topic is served easier questions.
    pub const EASY_THRESHOLD: f64 = -1.0;
    /// Strength at or above which a topic is served harder questions.
    pub const HARD_THRESHOLD: f64 = 2.0;

    /// Infer difficulty from a topic's aggregated outcomes.
    ///
    /// A struggling learner (negative strength) gets easier questions;
    /// an excelling one gets challenged. Topics with no attempts stay
    /// at `Medium`.
    pub fn from_stats(stats: &TopicStats) -> Self {
        if stats.attempts() == 0 {
            return Self::Medium;
        }
        let strength = stats.strength();
        if strength <= Self::EASY_THRESHOLD {
            Self::Easy
        } else if strength >= Self::HARD_THRESHOLD {
            Self::Hard
        } else {
            Self::Medium
        }
    }

    /// Stable lowercase label, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
