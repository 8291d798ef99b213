/// Session and progress-tracking errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown session: {session_id}")]
    SessionNotFound { session_id: String },
}
