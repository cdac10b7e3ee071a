//! Sample vs population divisor selection

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Denominator used by variance and standard deviation
///
/// `Sample` divides the sum of squared deviations by `n - 1` (ddof = 1),
/// `Population` divides by `n` (ddof = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisorMode {
    /// Bessel-corrected denominator (n - 1)
    #[default]
    Sample,
    /// Plain denominator (n)
    Population,
}

impl DivisorMode {
    /// Build from the boolean "is sample" flag used by configuration requests
    pub fn from_sample_flag(is_sample: bool) -> Self {
        if is_sample {
            Self::Sample
        } else {
            Self::Population
        }
    }

    /// Delta degrees of freedom
    pub fn ddof(&self) -> usize {
        match self {
            Self::Sample => 1,
            Self::Population => 0,
        }
    }

    /// Smallest number of observations for which the denominator is positive
    pub fn min_observations(&self) -> usize {
        self.ddof() + 1
    }

    /// Denominator for `count` observations (or total frequency)
    ///
    /// Fails with [`Error::InsufficientData`] when `count - ddof` would not be
    /// positive.
    pub fn denominator(&self, count: usize) -> Result<f64> {
        if count < self.min_observations() {
            return Err(Error::InsufficientData {
                expected: self.min_observations(),
                actual: count,
            });
        }
        Ok((count - self.ddof()) as f64)
    }

    /// Get the name of this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Population => "population",
        }
    }
}

impl fmt::Display for DivisorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ddof={})", self.name(), self.ddof())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddof() {
        assert_eq!(DivisorMode::Sample.ddof(), 1);
        assert_eq!(DivisorMode::Population.ddof(), 0);
        assert_eq!(DivisorMode::default(), DivisorMode::Sample);
    }

    #[test]
    fn test_from_sample_flag() {
        assert_eq!(DivisorMode::from_sample_flag(true), DivisorMode::Sample);
        assert_eq!(DivisorMode::from_sample_flag(false), DivisorMode::Population);
    }

    #[test]
    fn test_denominator() {
        assert_eq!(DivisorMode::Sample.denominator(8).unwrap(), 7.0);
        assert_eq!(DivisorMode::Population.denominator(8).unwrap(), 8.0);
        assert_eq!(DivisorMode::Population.denominator(1).unwrap(), 1.0);
    }

    #[test]
    fn test_sample_denominator_needs_two() {
        match DivisorMode::Sample.denominator(1) {
            Err(Error::InsufficientData { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected InsufficientData, got {other:?}"),
        }
        assert!(DivisorMode::Population.denominator(0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(DivisorMode::Sample.to_string(), "sample (ddof=1)");
        assert_eq!(DivisorMode::Population.to_string(), "population (ddof=0)");
    }
}
