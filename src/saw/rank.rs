//! Weighted aggregation and ranking.

use std::cmp::Ordering;

use tracing::warn;

use crate::criteria::CriteriaConfig;

use super::types::{NormalizedRecord, RankedEntry, ScoredRecord};

/// Computes the weighted-sum score of each normalized record.
///
/// `score = Σ_j normalized[j] * weight[j]` over the configured criteria.
/// A normalized record missing a criterion value cannot be produced by the
/// normalizer, but is tolerated here: the term contributes 0 and a warning
/// is emitted rather than failing the whole computation.
///
/// Output order equals input order (insertion order).
pub fn score(normalized: &[NormalizedRecord], config: &CriteriaConfig) -> Vec<ScoredRecord> {
    normalized
        .iter()
        .map(|rec| {
            let mut total = 0.0;
            for (j, crit) in config.criteria().iter().enumerate() {
                match rec.values.get(j) {
                    Some(v) => total += v * crit.weight,
                    None => warn!(
                        record = %rec.name,
                        criterion = %crit.name,
                        "normalized record is missing a criterion value; treated as 0"
                    ),
                }
            }
            ScoredRecord {
                name: rec.name.clone(),
                score: total,
            }
        })
        .collect()
}

/// Scores and ranks normalized records, best first.
///
/// Sorting is descending by score and **stable**: records with equal scores
/// keep their relative insertion order, so tie behavior is deterministic
/// without a secondary numeric tie-break. Rank positions are the 1-based
/// indices into the sorted sequence.
pub fn rank(normalized: &[NormalizedRecord], config: &CriteriaConfig) -> Vec<RankedEntry> {
    let mut scored = score(normalized, config);

    // Vec::sort_by is stable; scores are finite, so the comparison never
    // actually falls back to Equal.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, s)| RankedEntry {
            rank: i + 1,
            name: s.name,
            score: s.score,
        })
        .collect()
}
