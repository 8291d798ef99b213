//! Lexical overlap boost applied to the MMR-selected subset.
//!
//! A coarse keyword pass layered on top of the embedding-diversity
//! ranking, not a replacement for it: chunks that literally mention
//! the query's words move ahead of chunks that only match semantically.

use mentor_core::models::Candidate;

/// Number of query tokens (whitespace-split, case-folded) that occur
/// as substrings of the case-folded content.
pub fn overlap_score(query_text: &str, content: &str) -> usize {
    let content = content.to_lowercase();
    query_text
        .split_whitespace()
        .filter(|token| content.contains(&token.to_lowercase()))
        .count()
}

/// Stable-sort candidates by overlap with the query, descending.
/// Equal scores keep their incoming (MMR) order.
pub fn rerank_by_overlap(query_text: &str, candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut scored: Vec<(usize, Candidate)> = candidates
        .into_iter()
        .map(|c| (overlap_score(query_text, &c.content), c))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, c)| c).collect()
}
