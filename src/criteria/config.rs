//! Immutable criteria configuration.

use crate::error::SawError;

use super::types::{Criterion, Direction};

/// An ordered, immutable set of criteria.
///
/// The order of criteria is the column order of every record in the dataset;
/// it is fixed at engine construction and not editable at runtime.
///
/// # Examples
///
/// ```
/// use saw_rank::criteria::{CriteriaConfig, Direction};
///
/// let config = CriteriaConfig::new()
///     .with_criterion("RAM (GB)", 0.25, Direction::Benefit)
///     .with_criterion("Storage (GB)", 0.20, Direction::Benefit)
///     .with_criterion("Harga (juta)", 0.25, Direction::Cost)
///     .with_criterion("Kamera (MP)", 0.15, Direction::Benefit)
///     .with_criterion("Baterai (mAh)", 0.15, Direction::Benefit);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriteriaConfig {
    criteria: Vec<Criterion>,
}

impl CriteriaConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from an existing criterion list.
    pub fn from_criteria(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    /// Appends a criterion, preserving declaration order.
    pub fn with_criterion(
        mut self,
        name: impl Into<String>,
        weight: f64,
        direction: Direction,
    ) -> Self {
        self.criteria.push(Criterion::new(name, weight, direction));
        self
    }

    /// Returns the criteria in declaration order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns `true` when no criteria are configured.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns the column index of the named criterion, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.name == name)
    }

    /// Validates the configuration.
    ///
    /// Rejects an empty criterion list, duplicate criterion names, and
    /// weights that are negative or not finite.
    pub fn validate(&self) -> Result<(), SawError> {
        if self.criteria.is_empty() {
            return Err(SawError::InvalidConfiguration(
                "at least one criterion is required".into(),
            ));
        }
        for (i, crit) in self.criteria.iter().enumerate() {
            if crit.name.trim().is_empty() {
                return Err(SawError::InvalidConfiguration(format!(
                    "criterion at position {i} has an empty name"
                )));
            }
            if !crit.weight.is_finite() || crit.weight < 0.0 {
                return Err(SawError::InvalidConfiguration(format!(
                    "criterion '{}' has invalid weight {} (must be finite and >= 0)",
                    crit.name, crit.weight
                )));
            }
            if self.criteria[..i].iter().any(|c| c.name == crit.name) {
                return Err(SawError::InvalidConfiguration(format!(
                    "duplicate criterion name '{}'",
                    crit.name
                )));
            }
        }
        Ok(())
    }
}
