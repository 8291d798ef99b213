/// Re-ranking and retrieval pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("invalid top-k: {requested} (must be at least 1)")]
    InvalidTopK { requested: usize },

    #[error("invalid diversity weight: {value} (must be within [0.0, 1.0])")]
    InvalidDiversityWeight { value: f64 },

    #[error("vector search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },
}
