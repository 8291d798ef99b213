use serde::{Deserialize, Serialize};

use super::session::TopicStats;

/// One row of the weak-area ranking: a topic, its counters, and the
/// score that ordered it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeakArea {
    pub topic: String,
    pub stats: TopicStats,
    /// `incorrect + partial` — everything not fully correct.
    pub weakness_score: u64,
}
