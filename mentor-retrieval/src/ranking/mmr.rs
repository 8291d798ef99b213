//! Maximal Marginal Relevance selection.
//!
//! Greedy stage balancing relevance to the query against redundancy
//! with already-selected candidates:
//!
//! ```text
//! mmr(i) = w * sim(query, i) - (1 - w) * max_{j in selected} sim(i, j)
//! ```

use mentor_core::models::Candidate;

use crate::similarity::cosine_similarity;

/// Select up to `k` candidate indices by MMR, in selection order.
///
/// The seed pick is the candidate most similar to the query; every tie
/// at any stage resolves to the earliest pool position, so selection
/// is deterministic for a fixed pool order. When all embeddings are
/// degenerate (zero vectors) every similarity is 0.0 and selection
/// falls back to pool order.
pub fn select(
    query_embedding: &[f32],
    pool: &[Candidate],
    k: usize,
    diversity_weight: f64,
) -> Vec<usize> {
    if pool.is_empty() || k == 0 {
        return Vec::new();
    }

    let query_sims: Vec<f64> = pool
        .iter()
        .map(|c| cosine_similarity(query_embedding, &c.embedding))
        .collect();

    let take = k.min(pool.len());
    let mut selected: Vec<usize> = Vec::with_capacity(take);
    // Kept in ascending pool order so strict-greater comparisons give
    // first-occurrence-wins tie-breaking.
    let mut remaining: Vec<usize> = (0..pool.len()).collect();

    // Seed with the most query-relevant candidate.
    let seed_pos = argmax_position(&remaining, |idx| query_sims[idx]);
    selected.push(remaining.remove(seed_pos));

    while selected.len() < take {
        let best_pos = argmax_position(&remaining, |idx| {
            let redundancy = selected
                .iter()
                .map(|&chosen| cosine_similarity(&pool[idx].embedding, &pool[chosen].embedding))
                .fold(f64::MIN, f64::max);
            diversity_weight * query_sims[idx] - (1.0 - diversity_weight) * redundancy
        });
        selected.push(remaining.remove(best_pos));
    }

    selected
}

/// Position of the maximum score within `indices`; the first maximum
/// wins on ties.
fn argmax_position(indices: &[usize], score: impl Fn(usize) -> f64) -> usize {
    let mut best_pos = 0;
    let mut best_score = f64::MIN;
    for (pos, &idx) in indices.iter().enumerate() {
        let s = score(idx);
        if s > best_score {
            best_score = s;
            best_pos = pos;
        }
    }
    best_pos
}
