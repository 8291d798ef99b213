//! RerankEngine and the retrieval pipeline orchestrator.
//!
//! Stage 1: MMR selection over the embedding-scored pool.
//! Stage 2: lexical overlap boost on the selected subset.

use mentor_core::config::RetrievalConfig;
use mentor_core::errors::{MentorResult, RetrievalError};
use mentor_core::models::Candidate;
use mentor_core::traits::{IEmbeddingProvider, IVectorSource};
use tracing::{debug, info};

use crate::ranking::{lexical, mmr};

/// Two-stage candidate re-ranker: MMR then lexical boost.
#[derive(Debug, Default)]
pub struct RerankEngine;

impl RerankEngine {
    pub fn new() -> Self {
        Self
    }

    /// Re-rank a candidate pool down to at most `k` chunks.
    ///
    /// Returns `min(k, pool size)` candidates drawn from the pool
    /// without repetition, most relevant/diverse first after the
    /// lexical pass. An empty pool yields an empty result, not an
    /// error; degenerate geometry (all-zero embeddings) degrades to
    /// stable pool order rather than failing the retrieval path.
    pub fn rerank(
        &self,
        query_embedding: &[f32],
        candidates: Vec<Candidate>,
        k: usize,
        diversity_weight: f64,
        query_text: &str,
    ) -> MentorResult<Vec<Candidate>> {
        if k == 0 {
            return Err(RetrievalError::InvalidTopK { requested: k }.into());
        }
        if !(0.0..=1.0).contains(&diversity_weight) {
            return Err(RetrievalError::InvalidDiversityWeight {
                value: diversity_weight,
            }
            .into());
        }
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let picked = mmr::select(query_embedding, &candidates, k, diversity_weight);
        debug!(
            pool = candidates.len(),
            selected = picked.len(),
            diversity_weight,
            "mmr selection complete"
        );

        // Pull the selected candidates out in MMR order. Indices from
        // the selection are unique, so each slot is taken once.
        let mut slots: Vec<Option<Candidate>> = candidates.into_iter().map(Some).collect();
        let selected: Vec<Candidate> = picked
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect();

        Ok(lexical::rerank_by_overlap(query_text, selected))
    }
}

/// The full retrieval pipeline: embed query → over-fetched candidate
/// pool → MMR + lexical re-rank → final context chunks.
pub struct RetrievalEngine<'a> {
    source: &'a dyn IVectorSource,
    embedder: &'a dyn IEmbeddingProvider,
    reranker: RerankEngine,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        source: &'a dyn IVectorSource,
        embedder: &'a dyn IEmbeddingProvider,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            source,
            embedder,
            reranker: RerankEngine::new(),
            config,
        }
    }

    /// Retrieve the final `k` context chunks for a query.
    pub fn retrieve(&self, query: &str, k: usize) -> MentorResult<Vec<Candidate>> {
        if k == 0 {
            return Err(RetrievalError::InvalidTopK { requested: k }.into());
        }

        let query_embedding = self.embedder.embed(query)?;

        let pool_size = k.saturating_mul(self.config.pool_multiplier).max(k);
        let pool = self.source.search(query, pool_size)?;
        if pool.is_empty() {
            debug!(query, "vector source returned no candidates");
            return Ok(Vec::new());
        }
        info!(pool = pool.len(), k, "candidate pool fetched");

        let chunks = self.reranker.rerank(
            &query_embedding,
            pool,
            k,
            self.config.diversity_weight,
            query,
        )?;
        info!(chunks = chunks.len(), "retrieval complete");
        Ok(chunks)
    }
}
