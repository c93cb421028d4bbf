//! Criteria configuration.
//!
//! A criterion pairs a name with a weight (relative importance) and a
//! direction: *benefit* criteria reward high raw values, *cost* criteria
//! reward low ones. The full criterion set is an immutable configuration
//! value fixed when the engine is built, so multiple engines with different
//! criteria sets can coexist without interference.
//!
//! # References
//!
//! Hwang, C.-L. & Yoon, K. (1981). *Multiple Attribute Decision Making:
//! Methods and Applications*, Springer.

mod config;
mod types;

pub use config::CriteriaConfig;
pub use types::{Criterion, Direction};
