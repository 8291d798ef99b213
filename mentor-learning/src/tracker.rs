//! ProgressTracker: the session-bound tutoring progress operations,
//! orchestrated over the progress storage seam.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use mentor_core::config::SchedulerConfig;
use mentor_core::errors::{MentorResult, SessionError};
use mentor_core::models::{
    Attempt, Difficulty, Outcome, ReviewSchedule, SessionRecord, SessionSummary, WeakArea,
};
use mentor_core::traits::IProgressStore;

use crate::analysis;

/// Tracks graded attempts per session and topic, ranks weak areas,
/// and maintains the spaced-repetition schedule. One instance is
/// constructed by the composition root and shared; all state lives in
/// the injected store.
pub struct ProgressTracker {
    store: Arc<dyn IProgressStore>,
    scheduler: SchedulerConfig,
}

impl ProgressTracker {
    pub fn new(store: Arc<dyn IProgressStore>) -> Self {
        Self::with_config(store, SchedulerConfig::default())
    }

    pub fn with_config(store: Arc<dyn IProgressStore>, scheduler: SchedulerConfig) -> Self {
        Self { store, scheduler }
    }

    /// Create a session, optionally focused on one topic area.
    pub fn start_session(&self, focus: Option<String>) -> MentorResult<SessionRecord> {
        let session = SessionRecord::new(focus);
        self.store.insert_session(session.clone())?;
        info!(session_id = %session.id, focus = ?session.focus, "session started");
        Ok(session)
    }

    /// Record one graded answer: classify the verdict, append the
    /// attempt, and bump the session and topic counters atomically.
    pub fn record_attempt(
        &self,
        session_id: &str,
        question: &str,
        user_answer: &str,
        grade_text: &str,
        topic: &str,
    ) -> MentorResult<SessionRecord> {
        let outcome = Outcome::classify(grade_text);
        let attempt = Attempt::new(session_id, question, user_answer, grade_text, topic);
        let updated = self.store.apply_attempt(&attempt, outcome)?;
        debug!(session_id, topic, %outcome, total = updated.total, "attempt recorded");
        Ok(updated)
    }

    /// Session-level counters.
    pub fn summary(&self, session_id: &str) -> MentorResult<SessionSummary> {
        Ok(self.require_session(session_id)?.summary())
    }

    /// Full attempt history for a session, oldest first.
    pub fn attempts(&self, session_id: &str) -> MentorResult<Vec<Attempt>> {
        self.require_session(session_id)?;
        self.store.attempts(session_id)
    }

    /// Topics ranked by how much review they need.
    pub fn weak_areas(&self, session_id: &str) -> MentorResult<Vec<WeakArea>> {
        let session = self.require_session(session_id)?;
        Ok(analysis::rank_weak_areas(&session))
    }

    /// How hard the next question on a topic should be.
    pub fn topic_difficulty(
        &self,
        session_id: &str,
        topic: Option<&str>,
    ) -> MentorResult<Difficulty> {
        let session = self.require_session(session_id)?;
        Ok(analysis::infer_difficulty(&session, topic))
    }

    /// Advance the (session, topic) review schedule by one graded
    /// outcome, creating it on first encounter.
    pub fn update_schedule(
        &self,
        session_id: &str,
        topic: &str,
        grade_text: &str,
    ) -> MentorResult<ReviewSchedule> {
        let outcome = Outcome::classify(grade_text);
        let schedule =
            self.store
                .advance_schedule(session_id, topic, outcome, Utc::now(), &self.scheduler)?;
        debug!(
            session_id,
            topic,
            %outcome,
            interval_days = schedule.interval_days,
            ease = %schedule.ease_factor,
            "review schedule advanced"
        );
        Ok(schedule)
    }

    /// Topics due for review at `now`. Distinct from "no schedules
    /// yet": an unknown session id is an error.
    pub fn due_topics(&self, session_id: &str, now: DateTime<Utc>) -> MentorResult<Vec<String>> {
        self.require_session(session_id)?;
        Ok(self
            .store
            .schedules(session_id)?
            .into_iter()
            .filter(|schedule| schedule.is_due(now))
            .map(|schedule| schedule.topic)
            .collect())
    }

    fn require_session(&self, session_id: &str) -> MentorResult<SessionRecord> {
        self.store.get_session(session_id)?.ok_or_else(|| {
            SessionError::SessionNotFound {
                session_id: session_id.to_string(),
            }
            .into()
        })
    }
}
