//! ProgressStore — concurrent per-session storage via DashMap.

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use mentor_core::config::SchedulerConfig;
use mentor_core::errors::{MentorResult, SessionError};
use mentor_core::models::{Attempt, Outcome, ReviewSchedule, SessionRecord};
use mentor_core::traits::IProgressStore;

/// Thread-safe progress store. Counter updates and schedule advances
/// run under the owning entry's lock, which serializes them per
/// session id (and per (session, topic) for schedules).
#[derive(Default)]
pub struct ProgressStore {
    sessions: DashMap<String, SessionRecord>,
    attempts: DashMap<String, Vec<Attempt>>,
    schedules: DashMap<(String, String), ReviewSchedule>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently stored.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// All stored session IDs.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    /// Remove a session and everything recorded under it.
    pub fn remove_session(&self, session_id: &str) -> Option<SessionRecord> {
        self.attempts.remove(session_id);
        self.schedules.retain(|key, _| key.0 != session_id);
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    fn not_found(session_id: &str) -> SessionError {
        SessionError::SessionNotFound {
            session_id: session_id.to_string(),
        }
    }
}

impl IProgressStore for ProgressStore {
    fn insert_session(&self, session: SessionRecord) -> MentorResult<()> {
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    fn get_session(&self, session_id: &str) -> MentorResult<Option<SessionRecord>> {
        Ok(self.sessions.get(session_id).map(|r| r.clone()))
    }

    fn apply_attempt(&self, attempt: &Attempt, outcome: Outcome) -> MentorResult<SessionRecord> {
        let mut entry = self
            .sessions
            .get_mut(&attempt.session_id)
            .ok_or_else(|| Self::not_found(&attempt.session_id))?;
        entry.record(&attempt.topic, outcome);

        self.attempts
            .entry(attempt.session_id.clone())
            .or_default()
            .push(attempt.clone());

        Ok(entry.clone())
    }

    fn attempts(&self, session_id: &str) -> MentorResult<Vec<Attempt>> {
        Ok(self
            .attempts
            .get(session_id)
            .map(|log| log.clone())
            .unwrap_or_default())
    }

    fn advance_schedule(
        &self,
        session_id: &str,
        topic: &str,
        outcome: Outcome,
        now: DateTime<Utc>,
        config: &SchedulerConfig,
    ) -> MentorResult<ReviewSchedule> {
        if !self.sessions.contains_key(session_id) {
            return Err(Self::not_found(session_id).into());
        }

        let key = (session_id.to_string(), topic.to_string());
        let mut entry = self
            .schedules
            .entry(key)
            .or_insert_with(|| ReviewSchedule::fresh(session_id, topic, now, config));
        entry.advance(outcome, now, config);
        Ok(entry.clone())
    }

    fn schedules(&self, session_id: &str) -> MentorResult<Vec<ReviewSchedule>> {
        Ok(self
            .schedules
            .iter()
            .filter(|r| r.key().0 == session_id)
            .map(|r| r.value().clone())
            .collect())
    }
}
