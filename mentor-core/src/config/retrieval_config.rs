use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Final context chunks returned per query.
    pub top_k: usize,
    /// Candidate pool over-fetch factor relative to `top_k`.
    pub pool_multiplier: usize,
    /// MMR relevance/diversity balance in [0.0, 1.0].
    pub diversity_weight: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            pool_multiplier: defaults::DEFAULT_POOL_MULTIPLIER,
            diversity_weight: defaults::DEFAULT_DIVERSITY_WEIGHT,
        }
    }
}
