//! # mentor-core
//!
//! Foundation crate for the Mentor tutoring backend.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MentorConfig;
pub use errors::{MentorError, MentorResult};
pub use models::{
    Attempt, Candidate, Difficulty, EaseFactor, Outcome, ReviewSchedule, SessionRecord,
    SessionSummary, TopicStats, WeakArea,
};
