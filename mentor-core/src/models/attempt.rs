use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only log entry for one graded answer. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub id: Uuid,
    pub session_id: String,
    pub question: String,
    pub user_answer: String,
    /// Raw grader verdict text, kept verbatim for audit.
    pub grade_text: String,
    pub topic: String,
    pub recorded_at: DateTime<Utc>,
}

impl Attempt {
    pub fn new(
        session_id: impl Into<String>,
        question: impl Into<String>,
        user_answer: impl Into<String>,
        grade_text: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id: session_id.into(),
            question: question.into(),
            user_answer: user_answer.into(),
            grade_text: grade_text.into(),
            topic: topic.into(),
            recorded_at: Utc::now(),
        }
    }
}
