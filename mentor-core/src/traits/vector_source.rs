use crate::errors::MentorResult;
use crate::models::Candidate;

/// Similarity search provider (the vector database collaborator).
pub trait IVectorSource: Send + Sync {
    /// Top-k similarity search. Hits arrive ranked by the source's own
    /// scoring and carry their raw embeddings, so downstream re-ranking
    /// never re-embeds retrieved content.
    fn search(&self, query: &str, k: usize) -> MentorResult<Vec<Candidate>>;

    /// Number of chunks currently indexed.
    fn count(&self) -> usize;

    /// Human-readable source name.
    fn name(&self) -> &str;
}
