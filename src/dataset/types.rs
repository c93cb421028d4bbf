//! Record type and the text-to-number parsing boundary.

use std::collections::HashMap;

use crate::criteria::CriteriaConfig;
use crate::error::SawError;

/// A named candidate item with one raw value per configured criterion.
///
/// `values` is index-aligned with the configuration's criterion order, so a
/// record cannot silently miss a criterion: construction through
/// [`Record::parse`] fails unless every criterion parses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Unique record name (case-sensitive key within the dataset).
    pub name: String,

    /// Raw criterion values, in configuration order.
    pub values: Vec<f64>,
}

impl Record {
    /// Builds a record from user-entered text values keyed by criterion name.
    ///
    /// Values originate as form input, so both `.` and `,` are accepted as
    /// the decimal separator. A missing criterion, an empty string, or text
    /// that does not parse as a finite number is rejected with
    /// [`SawError::InvalidValue`] naming the criterion; NaN and infinities
    /// are rejected because they would poison the column min/max used by
    /// normalization.
    pub fn parse(
        name: impl Into<String>,
        raw: &HashMap<String, String>,
        config: &CriteriaConfig,
    ) -> Result<Self, SawError> {
        let mut values = Vec::with_capacity(config.len());
        for crit in config.criteria() {
            let text = raw.get(&crit.name).map(String::as_str).unwrap_or("");
            values.push(parse_value(text, &crit.name)?);
        }
        Ok(Self {
            name: name.into(),
            values,
        })
    }
}

/// Parses one criterion value, mapping a decimal comma to a dot.
fn parse_value(text: &str, criterion: &str) -> Result<f64, SawError> {
    let invalid = || SawError::InvalidValue {
        criterion: criterion.to_string(),
        value: text.to_string(),
    };

    let cleaned = text.trim().replace(',', ".");
    if cleaned.is_empty() {
        return Err(invalid());
    }
    let value: f64 = cleaned.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}
