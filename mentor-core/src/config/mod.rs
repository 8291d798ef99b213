pub mod defaults;
pub mod retrieval_config;
pub mod scheduler_config;

pub use retrieval_config::RetrievalConfig;
pub use scheduler_config::SchedulerConfig;

use serde::{Deserialize, Serialize};

/// Aggregated configuration for the whole workspace.
/// The composition root deserializes this from whatever source it
/// prefers; every field falls back to its documented default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MentorConfig {
    pub retrieval: RetrievalConfig,
    pub scheduler: SchedulerConfig,
}
