use chrono::{DateTime, Utc};

use crate::config::SchedulerConfig;
use crate::errors::MentorResult;
use crate::models::{Attempt, Outcome, ReviewSchedule, SessionRecord};

/// Durable storage seam for sessions, attempts, and review schedules.
///
/// `apply_attempt` and `advance_schedule` are read-modify-write cycles
/// and must be applied atomically with respect to concurrent calls on
/// the same session id; operations on different sessions may run fully
/// in parallel. A per-session lock or a single-writer transaction both
/// satisfy this.
pub trait IProgressStore: Send + Sync {
    // --- Sessions ---
    fn insert_session(&self, session: SessionRecord) -> MentorResult<()>;
    fn get_session(&self, session_id: &str) -> MentorResult<Option<SessionRecord>>;

    // --- Attempts ---
    /// Append the attempt and bump the session and topic counters in
    /// one atomic step. Returns the updated session.
    fn apply_attempt(&self, attempt: &Attempt, outcome: Outcome) -> MentorResult<SessionRecord>;
    fn attempts(&self, session_id: &str) -> MentorResult<Vec<Attempt>>;

    // --- Review schedules ---
    /// Lazily create the (session, topic) schedule, then advance it by
    /// one graded outcome. Atomic per (session, topic).
    fn advance_schedule(
        &self,
        session_id: &str,
        topic: &str,
        outcome: Outcome,
        now: DateTime<Utc>,
        config: &SchedulerConfig,
    ) -> MentorResult<ReviewSchedule>;
    fn schedules(&self, session_id: &str) -> MentorResult<Vec<ReviewSchedule>>;
}
