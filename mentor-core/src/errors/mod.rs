pub mod retrieval_error;
pub mod session_error;

pub use retrieval_error::RetrievalError;
pub use session_error::SessionError;

/// Top-level error type for the Mentor workspace.
#[derive(Debug, thiserror::Error)]
pub enum MentorError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Convenience alias used by every fallible operation in the workspace.
pub type MentorResult<T> = Result<T, MentorError>;
