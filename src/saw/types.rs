//! Derived record types produced by the normalization and ranking stages.

use std::fmt;

/// A record after direction-aware normalization.
///
/// Values are index-aligned with the criteria configuration, like the raw
/// [`Record`](crate::dataset::Record) they were derived from, and lie in
/// `[0, 1]` for non-negative input data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedRecord {
    /// Name of the source record.
    pub name: String,

    /// Normalized criterion values, in configuration order.
    pub values: Vec<f64>,
}

/// A record reduced to its weighted-sum score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRecord {
    /// Name of the source record.
    pub name: String,

    /// Weighted sum of the normalized values.
    pub score: f64,
}

/// One row of the final ranking table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    /// 1-based rank position (1 = best).
    pub rank: usize,

    /// Name of the source record.
    pub name: String,

    /// Weighted-sum score.
    pub score: f64,
}

impl fmt::Display for RankedEntry {
    /// Renders `rank. name (score)` with the score to four decimal places,
    /// the precision the result table is displayed with.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({:.4})", self.rank, self.name, self.score)
    }
}
