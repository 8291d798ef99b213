//! Weak-area ranking and difficulty inference over session aggregates.

use mentor_core::models::{Difficulty, SessionRecord, WeakArea};

/// Rank attempted topics by weakness score, descending.
///
/// The sort is stable over the session's first-seen topic order, so
/// equal scores rank in the order the learner first met the topics.
/// Topics with zero attempts never appear (a topic entry only exists
/// once something was recorded under it).
pub fn rank_weak_areas(session: &SessionRecord) -> Vec<WeakArea> {
    let mut ranked: Vec<WeakArea> = session
        .topics
        .iter()
        .filter(|(_, stats)| stats.attempts() > 0)
        .map(|(topic, stats)| WeakArea {
            topic: topic.clone(),
            stats: *stats,
            weakness_score: stats.weakness_score(),
        })
        .collect();
    ranked.sort_by(|a, b| b.weakness_score.cmp(&a.weakness_score));
    ranked
}

/// Infer how hard follow-up questions on a topic should be.
/// `Medium` when no topic is given or nothing was recorded under it.
pub fn infer_difficulty(session: &SessionRecord, topic: Option<&str>) -> Difficulty {
    match topic.and_then(|t| session.topic_stats(t)) {
        Some(stats) => Difficulty::from_stats(stats),
        None => Difficulty::Medium,
    }
}
