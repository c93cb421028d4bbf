//! SAW normalization and ranking stages.
//!
//! Simple Additive Weighting reduces a multi-criteria comparison to a single
//! scalar per record in two stages:
//!
//! 1. **Normalize**: each criterion column is rescaled into a common,
//!    benefit-oriented range using only the values in the current dataset
//!    (min/max are dataset-relative, not globally fixed).
//! 2. **Rank**: each record's normalized values are folded into a weighted
//!    sum and records are ordered descending by score, ties keeping
//!    insertion order.
//!
//! Both stages are pure functions over slices; the stateful staging that
//! enforces "normalize before score" lives in [`crate::engine`].
//!
//! # References
//!
//! - Fishburn, P. C. (1967). "Additive Utilities with Incomplete Product
//!   Sets", *Operations Research* 15(3).
//! - Hwang, C.-L. & Yoon, K. (1981). *Multiple Attribute Decision Making:
//!   Methods and Applications*, Springer.

mod normalize;
mod rank;
mod types;

pub use normalize::normalize;
pub use rank::{rank, score};
pub use types::{NormalizedRecord, RankedEntry, ScoredRecord};
