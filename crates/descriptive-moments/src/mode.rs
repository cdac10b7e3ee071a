//! Mode detection with explicit tie handling

use descriptive_core::{Error, Result, StatValue};
use descriptive_frequency::distinct_counts;
use serde::{Serialize, Serializer};
use std::fmt;

/// Mode of an ungrouped sample
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Exactly one value attains the highest count
    Single(f64),
    /// Several, but not all, distinct values tie at the highest count
    /// (ascending order)
    Multiple(Vec<f64>),
    /// Every distinct value has the same count
    NoMode,
}

impl Mode {
    /// Check if a mode exists
    pub fn exists(&self) -> bool {
        !matches!(self, Self::NoMode)
    }

    /// The modal values (empty when there is no mode)
    pub fn values(&self) -> Vec<f64> {
        match self {
            Self::Single(value) => vec![*value],
            Self::Multiple(values) => values.clone(),
            Self::NoMode => Vec::new(),
        }
    }
}

impl From<Mode> for StatValue {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single(value) => StatValue::Number(value),
            Mode::Multiple(values) => StatValue::NumberList(values),
            Mode::NoMode => StatValue::Missing,
        }
    }
}

impl From<&Mode> for StatValue {
    fn from(mode: &Mode) -> Self {
        mode.clone().into()
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        StatValue::from(self).serialize(serializer)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&StatValue::from(self), f)
    }
}

/// Detect the mode of `sample`
///
/// A single most frequent value is the mode, which includes a sample of one
/// distinct value repeated. When several distinct values exist and all are
/// equally frequent (all values unique, for instance) there is no mode.
/// Otherwise every value tied at the highest count is reported.
///
/// # Examples
///
/// ```rust
/// use descriptive_moments::{detect_mode, Mode};
///
/// assert_eq!(detect_mode(&[1.0, 1.0, 1.0, 2.0, 2.0, 3.0]).unwrap(), Mode::Single(1.0));
/// assert_eq!(detect_mode(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap(), Mode::Multiple(vec![1.0, 2.0]));
/// assert_eq!(detect_mode(&[1.0, 2.0, 3.0]).unwrap(), Mode::NoMode);
/// ```
pub fn detect_mode(sample: &[f64]) -> Result<Mode> {
    if sample.is_empty() {
        return Err(Error::empty_input("mode"));
    }

    let counts = distinct_counts(sample)?;
    let max_count = counts.iter().map(|&(_, count)| count).max().unwrap_or(0);
    let tied: Vec<f64> = counts
        .iter()
        .filter(|&&(_, count)| count == max_count)
        .map(|&(value, _)| value)
        .collect();

    // A single distinct value is both "one value at the max" and "all tied";
    // the single-value rule is checked first.
    Ok(match tied.len() {
        1 => Mode::Single(tied[0]),
        n if n == counts.len() => Mode::NoMode,
        _ => Mode::Multiple(tied),
    })
}
