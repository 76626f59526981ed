// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring and ranking for suggestion candidates.

use std::collections::HashSet;

use crate::types::{Candidate, ScoredCandidate, LABEL_SEPARATOR};

/// Candidates scoring below this are dropped unless the caller overrides it.
pub const DEFAULT_MIN_SCORE: u32 = 2;

const EXACT_BONUS: u32 = 100;
const PREFIX_BONUS: u32 = 10;
const CONTAINS_BONUS: u32 = 2;
const SUFFIX_BONUS: u32 = 1;

/// Ranks candidates against `query` and returns their display labels,
/// highest score first.
pub fn rank(candidates: &[Candidate], query: &str, min_score: u32) -> Vec<String> {
    score_candidates(candidates, query, min_score)
        .into_iter()
        .map(|scored| scored.label)
        .collect()
}

/// Scores every candidate, drops those below `min_score` and sorts the rest
/// descending. Equal scores keep their fetch order.
pub fn score_candidates(
    candidates: &[Candidate],
    query: &str,
    min_score: u32,
) -> Vec<ScoredCandidate> {
    if query.is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();

    let mut results: Vec<ScoredCandidate> = candidates
        .iter()
        .filter_map(|candidate| {
            let suggestion = candidate.suggestion.to_lowercase();
            let score = relevance_score(&suggestion, &query_lower);
            if score >= min_score {
                Some(ScoredCandidate {
                    label: format!("{suggestion}{LABEL_SEPARATOR}{}", candidate.from),
                    score,
                })
            } else {
                None
            }
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Scores a single suggestion against a query, case-insensitively.
pub fn score(suggestion: &str, query: &str) -> u32 {
    relevance_score(&suggestion.to_lowercase(), &query.to_lowercase())
}

/// Keeps the first item for each label, comparing labels case-insensitively.
pub fn dedup_by_label<T, F>(items: Vec<T>, label: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(label(item).to_lowercase()))
        .collect()
}

/// Returns the part of a rendered label before the first separator.
pub fn canonical_query(label: &str) -> &str {
    label
        .split_once(LABEL_SEPARATOR)
        .map_or(label, |(query, _)| query)
}

/// Computes the additive score for an already lower-cased pair.
fn relevance_score(suggestion: &str, query: &str) -> u32 {
    let mut score = 0u32;

    if suggestion == query {
        score += EXACT_BONUS;
    }
    if suggestion.starts_with(query) {
        score += PREFIX_BONUS;
    }
    if suggestion.contains(query) {
        score += CONTAINS_BONUS;
    }
    if suggestion.ends_with(query) {
        score += SUFFIX_BONUS;
    }

    score
}
