//! Direction-aware column normalization.

use crate::criteria::{CriteriaConfig, Direction};
use crate::dataset::Record;
use crate::error::SawError;

use super::types::NormalizedRecord;

/// Normalizes each criterion column into a common benefit-oriented range.
///
/// Each column is rescaled independently, relative to the values currently
/// in the dataset:
///
/// - **Benefit**: `v / max(column)`. If the column maximum is 0 the whole
///   column normalizes to 0 — no record is better than another on an
///   all-zero column, and there is nothing to divide by.
/// - **Cost**: `min(column) / v`, where the minimum is taken over the
///   non-zero values of the column. A value of exactly 0 normalizes to 1:
///   an item with zero cost is maximally preferred. Note the asymmetry with
///   the benefit rule (all-zero benefit column → 0, zero cost value → 1);
///   it is intentional and relied upon by callers.
///
/// Output preserves record names and insertion order. Fails with
/// [`SawError::EmptyDataset`] when `records` is empty.
pub fn normalize(
    records: &[Record],
    config: &CriteriaConfig,
) -> Result<Vec<NormalizedRecord>, SawError> {
    if records.is_empty() {
        return Err(SawError::EmptyDataset);
    }

    let mut out: Vec<NormalizedRecord> = records
        .iter()
        .map(|r| NormalizedRecord {
            name: r.name.clone(),
            values: vec![0.0; config.len()],
        })
        .collect();

    for (j, crit) in config.criteria().iter().enumerate() {
        let column: Vec<f64> = records
            .iter()
            .map(|r| r.values.get(j).copied().unwrap_or(0.0))
            .collect();

        match crit.direction {
            Direction::Benefit => {
                let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                for (i, &v) in column.iter().enumerate() {
                    out[i].values[j] = if max == 0.0 { 0.0 } else { v / max };
                }
            }
            Direction::Cost => {
                // Minimum over non-zero entries only; zero-cost entries are
                // handled by the special case below and must not drag the
                // reference minimum to 0.
                let min = column
                    .iter()
                    .copied()
                    .filter(|&v| v != 0.0)
                    .fold(f64::INFINITY, f64::min);
                for (i, &v) in column.iter().enumerate() {
                    out[i].values[j] = if v == 0.0 { 1.0 } else { min / v };
                }
            }
        }
    }

    Ok(out)
}
