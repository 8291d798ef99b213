use serde::{Deserialize, Serialize};

use super::defaults;

/// Spaced-repetition scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Interval assigned to a freshly scheduled topic (days).
    pub initial_interval_days: u32,
    /// Starting ease factor; clamped to the EaseFactor range on use.
    pub initial_ease: f64,
    /// Ease gained on a fully correct answer.
    pub ease_reward: f64,
    /// Ease lost on an incorrect answer.
    pub ease_penalty: f64,
    /// Interval growth factor on a partially correct answer.
    pub partial_growth: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            initial_interval_days: defaults::DEFAULT_INITIAL_INTERVAL_DAYS,
            initial_ease: defaults::DEFAULT_INITIAL_EASE,
            ease_reward: defaults::DEFAULT_EASE_REWARD,
            ease_penalty: defaults::DEFAULT_EASE_PENALTY,
            partial_growth: defaults::DEFAULT_PARTIAL_GROWTH,
        }
    }
}
