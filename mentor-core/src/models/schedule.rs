use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ease::EaseFactor;
use super::outcome::Outcome;
use crate::config::SchedulerConfig;
use crate::constants::MIN_INTERVAL_DAYS;

/// Spaced-repetition state for one (session, topic) pair.
///
/// Created lazily on the first graded attempt for the topic, advanced
/// on every one after that. Simplified SM-2: successful recall
/// lengthens the gap to the next review, failure collapses it back to
/// daily, and the ease factor tracks how quickly the interval grows.
/// `interval_days >= 1` always; the ease factor clamps itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSchedule {
    pub session_id: String,
    pub topic: String,
    pub interval_days: u32,
    pub ease_factor: EaseFactor,
    pub next_review_at: DateTime<Utc>,
}

impl ReviewSchedule {
    /// First-encounter state: review immediately, daily interval.
    pub fn fresh(
        session_id: impl Into<String>,
        topic: impl Into<String>,
        now: DateTime<Utc>,
        config: &SchedulerConfig,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            topic: topic.into(),
            interval_days: config.initial_interval_days.max(MIN_INTERVAL_DAYS),
            ease_factor: EaseFactor::new(config.initial_ease),
            next_review_at: now,
        }
    }

    /// Apply one graded outcome and move the next review date.
    pub fn advance(&mut self, outcome: Outcome, now: DateTime<Utc>, config: &SchedulerConfig) {
        match outcome {
            Outcome::Correct => {
                self.interval_days =
                    (self.interval_days as f64 * self.ease_factor.value()).floor() as u32;
                self.ease_factor = self.ease_factor.reward(config.ease_reward);
            }
            Outcome::Partial => {
                self.interval_days = ((self.interval_days as f64 * config.partial_growth).floor()
                    as u32)
                    .max(MIN_INTERVAL_DAYS);
            }
            Outcome::Incorrect => {
                self.interval_days = MIN_INTERVAL_DAYS;
                self.ease_factor = self.ease_factor.penalize(config.ease_penalty);
            }
        }
        self.next_review_at = now + Duration::days(self.interval_days as i64);
    }

    /// Whether this topic is due for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }
}
