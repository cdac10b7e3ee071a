//! Descriptive statistics of raw (ungrouped) observations

use crate::mode::{detect_mode, Mode};
use descriptive_core::utils::{ensure_finite, median_sorted, round4, sorted};
use descriptive_core::{DivisorMode, Error, Result, StatisticSet};
use serde::Serialize;
use statrs::statistics::Statistics;
use std::fmt;
use tracing::{debug, instrument};

/// Direction of skew suggested by comparing mean and median
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkewDirection {
    /// Mean above median
    Right,
    /// Mean below median
    Left,
    /// Mean equal to median
    Symmetric,
}

impl SkewDirection {
    /// Classify from unrounded mean and median
    pub fn from_mean_median(mean: f64, median: f64) -> Self {
        if mean > median {
            Self::Right
        } else if mean < median {
            Self::Left
        } else {
            Self::Symmetric
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Right => "right (positive)",
            Self::Left => "left (negative)",
            Self::Symmetric => "symmetric",
        }
    }
}

impl fmt::Display for SkewDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Summary of an ungrouped sample
///
/// Every number except the mode is rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct UngroupedSummary {
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Skew suggested by the unrounded mean and median
    pub visual_skew: SkewDirection,
    /// Number of observations
    pub count: usize,
    /// Divisor the dispersion statistics were computed with
    pub divisor: DivisorMode,
}

impl UngroupedSummary {
    /// The named statistics in reporting order
    pub fn statistics(&self) -> StatisticSet {
        StatisticSet::new()
            .with("media", self.mean)
            .with("mediana", self.median)
            .with("moda", &self.mode)
            .with("varianza", self.variance)
            .with("desviacion_estandar", self.std_dev)
            .with("valor_minimo", self.min)
            .with("valor_maximo", self.max)
            .with("rango", self.range)
    }
}

/// Estimator for raw observations
///
/// # Examples
///
/// ```rust
/// use descriptive_core::DivisorMode;
/// use descriptive_moments::UngroupedEstimator;
///
/// let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
///
/// let sample = UngroupedEstimator::new(DivisorMode::Sample).estimate(&data).unwrap();
/// assert_eq!(sample.variance, 4.5714);
///
/// let population = UngroupedEstimator::new(DivisorMode::Population).estimate(&data).unwrap();
/// assert_eq!(population.variance, 4.0);
/// assert_eq!(population.std_dev, 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UngroupedEstimator {
    divisor: DivisorMode,
}

impl UngroupedEstimator {
    pub fn new(divisor: DivisorMode) -> Self {
        Self { divisor }
    }

    pub fn divisor(&self) -> DivisorMode {
        self.divisor
    }

    /// Compute the summary of `sample`
    ///
    /// Fails with [`Error::EmptyDataset`] for an empty sample,
    /// [`Error::InvalidValue`] for NaN or infinite values, and
    /// [`Error::InsufficientData`] for a single observation in sample mode.
    #[instrument(skip(self, sample), fields(n = sample.len(), divisor = %self.divisor))]
    pub fn estimate(&self, sample: &[f64]) -> Result<UngroupedSummary> {
        if sample.is_empty() {
            return Err(Error::empty_input("ungrouped statistics"));
        }
        ensure_finite(sample, "observations")?;
        self.divisor.denominator(sample.len())?;

        let sorted = sorted(sample);
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let mean = sample.iter().mean();
        let median = median_sorted(&sorted);
        let mode = detect_mode(sample)?;

        let variance = match self.divisor {
            DivisorMode::Sample => sample.iter().variance(),
            DivisorMode::Population => sample.iter().population_variance(),
        };
        let std_dev = variance.sqrt();

        let summary = UngroupedSummary {
            mean: round4(mean),
            median: round4(median),
            mode,
            variance: round4(variance),
            std_dev: round4(std_dev),
            min: round4(min),
            max: round4(max),
            range: round4(max - min),
            visual_skew: SkewDirection::from_mean_median(mean, median),
            count: sample.len(),
            divisor: self.divisor,
        };
        debug!(mean = summary.mean, variance = summary.variance, mode = %summary.mode, "ungrouped summary");
        Ok(summary)
    }
}

/// Summarize `sample` with the given divisor
pub fn describe_ungrouped(sample: &[f64], divisor: DivisorMode) -> Result<UngroupedSummary> {
    UngroupedEstimator::new(divisor).estimate(sample)
}
