use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::outcome::Outcome;

/// Per-topic outcome counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicStats {
    pub correct: u64,
    pub partial: u64,
    pub incorrect: u64,
}

impl TopicStats {
    /// Total attempts recorded under this topic.
    pub fn attempts(&self) -> u64 {
        self.correct + self.partial + self.incorrect
    }

    /// Weakness score used to rank review recommendations:
    /// everything that was not fully correct.
    pub fn weakness_score(&self) -> u64 {
        self.incorrect + self.partial
    }

    /// Learner strength on this topic. Partial credit counts half
    /// against the learner.
    pub fn strength(&self) -> f64 {
        self.correct as f64 - self.incorrect as f64 - 0.5 * self.partial as f64
    }

    /// Bump the counter matching one graded outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Partial => self.partial += 1,
            Outcome::Incorrect => self.incorrect += 1,
        }
    }
}

/// One learner session: overall counters plus per-topic breakdowns.
///
/// Topics are kept in first-seen order (a Vec, not a map) so that any
/// ranking that tie-breaks on topic order is deterministic across runs.
/// Mutated only through [`SessionRecord::record`]; the invariant
/// `total == correct + partial + incorrect` holds at all times, both
/// overall and within each topic entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    /// Optional focus area requested at session start.
    pub focus: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total: u64,
    pub correct: u64,
    pub partial: u64,
    pub incorrect: u64,
    /// Topic → counters, in first-seen order.
    pub topics: Vec<(String, TopicStats)>,
}

impl SessionRecord {
    /// Create a fresh session with a random id and zeroed counters.
    pub fn new(focus: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            focus,
            created_at: Utc::now(),
            total: 0,
            correct: 0,
            partial: 0,
            incorrect: 0,
            topics: Vec::new(),
        }
    }

    /// Record one graded outcome under a topic, creating the topic
    /// entry with zeroed counters on first sight.
    pub fn record(&mut self, topic: &str, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Partial => self.partial += 1,
            Outcome::Incorrect => self.incorrect += 1,
        }

        let pos = match self.topics.iter().position(|(name, _)| name == topic) {
            Some(pos) => pos,
            None => {
                self.topics.push((topic.to_string(), TopicStats::default()));
                self.topics.len() - 1
            }
        };
        self.topics[pos].1.record(outcome);
    }

    /// Counters for one topic, if any attempt was recorded under it.
    pub fn topic_stats(&self, topic: &str) -> Option<&TopicStats> {
        self.topics
            .iter()
            .find(|(name, _)| name == topic)
            .map(|(_, stats)| stats)
    }

    /// Read model for the session-level counters.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id.clone(),
            focus: self.focus.clone(),
            total: self.total,
            correct: self.correct,
            partial: self.partial,
            incorrect: self.incorrect,
        }
    }
}

/// Session-level counters as returned to the API layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub focus: Option<String>,
    pub total: u64,
    pub correct: u64,
    pub partial: u64,
    pub incorrect: u64,
}
