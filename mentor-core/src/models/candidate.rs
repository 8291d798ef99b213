use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One similarity-search hit: a chunk of source material with its
/// embedding and provenance metadata.
///
/// Produced by the vector source, consumed once per query by the
/// re-ranking engine, never persisted. The embedding is the raw vector
/// the source indexed, so re-ranking does not re-embed content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Chunk text handed to prompt assembly after re-ranking.
    pub content: String,
    /// Embedding vector as indexed by the vector source.
    pub embedding: Vec<f32>,
    /// Free-form provenance metadata (source file, page, url, ...).
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    /// Similarity score assigned by the vector source's own ranking.
    pub similarity: f64,
}

impl Candidate {
    /// Build a candidate with empty metadata.
    pub fn new(content: impl Into<String>, embedding: Vec<f32>, similarity: f64) -> Self {
        Self {
            content: content.into(),
            embedding,
            metadata: HashMap::new(),
            similarity,
        }
    }
}
