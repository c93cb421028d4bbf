//! Simple Additive Weighting (SAW) multi-criteria decision engine.
//!
//! Ranks a set of named candidate items against multiple weighted criteria:
//!
//! - **Criteria configuration**: each criterion has a weight and a direction
//!   (*benefit*: higher raw value is better; *cost*: lower raw value is
//!   better). The criterion set is immutable configuration, fixed at engine
//!   construction.
//! - **Dataset store**: validated records (name + one numeric value per
//!   criterion), held in insertion order for the lifetime of a session.
//! - **Normalizer**: per-criterion, dataset-relative rescaling into a common
//!   benefit-oriented range.
//! - **Ranker**: weighted sum per record, stable descending sort, 1-based
//!   rank positions.
//!
//! # Architecture
//!
//! Data flows one way: dataset → normalizer → ranker. Derived data is fully
//! recomputed on every ranking request; the dataset is session-local mutable
//! state owned by a single caller, with no internal synchronization.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use saw_rank::criteria::{CriteriaConfig, Direction};
//! use saw_rank::engine::SawEngine;
//!
//! let config = CriteriaConfig::new()
//!     .with_criterion("RAM (GB)", 0.25, Direction::Benefit)
//!     .with_criterion("Harga (juta)", 0.25, Direction::Cost);
//!
//! let mut engine = SawEngine::new(config)?;
//! engine.add_record(
//!     "Phone A",
//!     &HashMap::from([
//!         ("RAM (GB)".to_string(), "8".to_string()),
//!         ("Harga (juta)".to_string(), "3,5".to_string()),
//!     ]),
//! )?;
//!
//! let ranking = engine.compute_ranking()?;
//! assert_eq!(ranking[0].rank, 1);
//! # Ok::<(), saw_rank::SawError>(())
//! ```
//!
//! # References
//!
//! - Fishburn, P. C. (1967). "Additive Utilities with Incomplete Product
//!   Sets", *Operations Research* 15(3).
//! - Hwang, C.-L. & Yoon, K. (1981). *Multiple Attribute Decision Making:
//!   Methods and Applications*, Springer.

pub mod criteria;
pub mod dataset;
pub mod engine;
mod error;
pub mod saw;

pub use error::SawError;
