//! Criterion definition types.

use std::fmt;
use std::str::FromStr;

use crate::error::SawError;

/// Orientation of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Higher raw value is more desirable. Normalized by dividing by the
    /// column maximum.
    Benefit,

    /// Lower raw value is more desirable. Normalized by dividing the column
    /// minimum by the value.
    Cost,
}

impl FromStr for Direction {
    type Err = SawError;

    /// Parses `"benefit"` or `"cost"` (case-insensitive).
    ///
    /// Any other string is an [`SawError::InvalidConfiguration`]; direction
    /// text originates from configuration, so an unrecognized direction is a
    /// configuration fault, not user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(Direction::Benefit),
            "cost" => Ok(Direction::Cost),
            other => Err(SawError::InvalidConfiguration(format!(
                "unrecognized criterion direction '{other}' (expected 'benefit' or 'cost')"
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Benefit => write!(f, "benefit"),
            Direction::Cost => write!(f, "cost"),
        }
    }
}

/// A single decision criterion: name, relative weight, and direction.
///
/// Weights are non-negative reals. They need not sum to 1, but scores are
/// only comparable across datasets when they conventionally do.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    /// Criterion name, unique within a configuration.
    pub name: String,

    /// Relative importance in the aggregate score. Must be finite and ≥ 0.
    pub weight: f64,

    /// Whether high or low raw values are preferred.
    pub direction: Direction,
}

impl Criterion {
    /// Creates a criterion.
    pub fn new(name: impl Into<String>, weight: f64, direction: Direction) -> Self {
        Self {
            name: name.into(),
            weight,
            direction,
        }
    }
}
