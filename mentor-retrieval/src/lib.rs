//! # mentor-retrieval
//!
//! Candidate re-ranking for the tutoring pipeline: Maximal Marginal
//! Relevance selection over an embedding-scored pool, then a lexical
//! overlap boost. Also hosts the retrieval pipeline orchestrator that
//! glues the vector source and embedding provider to the engine.

pub mod engine;
pub mod ranking;
pub mod similarity;

pub use engine::{RerankEngine, RetrievalEngine};
pub use similarity::cosine_similarity;
