//! Descriptive statistics of grouped (class/frequency) data
//!
//! Every class is represented by its midpoint, weighted by its frequency.
//! The median and mode of grouped data are reported as classes rather than
//! values.

use descriptive_core::utils::round4;
use descriptive_core::{DivisorMode, Error, Result, StatisticSet};
use descriptive_frequency::{pair_classes, ClassFrequency};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// A class singled out by position (median class, modal class)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassPosition {
    /// Zero-based index in submitted order
    pub index: usize,
    /// Label as submitted
    pub label: String,
}

impl ClassPosition {
    fn of(classes: &[ClassFrequency], index: usize) -> Self {
        Self {
            index,
            label: classes[index].label.clone(),
        }
    }

    /// `"Class <1-based index>: <label>"`
    pub fn describe_median(&self) -> String {
        format!("Class {}: {}", self.index + 1, self.label)
    }

    /// `"Modal class: <label>"`
    pub fn describe_modal(&self) -> String {
        format!("Modal class: {}", self.label)
    }
}

impl fmt::Display for ClassPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.index + 1, self.label)
    }
}

/// Range parameters of the submitted classes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedParameters {
    /// Largest upper bound
    #[serde(rename = "valor_maximo")]
    pub max: f64,
    /// Smallest lower bound
    #[serde(rename = "valor_minimo")]
    pub min: f64,
    /// `max - min`
    #[serde(rename = "rango")]
    pub range: f64,
    /// Number of classes
    #[serde(rename = "num_clases")]
    pub class_count: usize,
    /// `range / class_count`
    #[serde(rename = "amplitud")]
    pub amplitude: f64,
}

impl GroupedParameters {
    /// Compute from parsed classes, zero-frequency classes included
    pub fn from_classes(classes: &[ClassFrequency]) -> Self {
        if classes.is_empty() {
            return Self {
                max: 0.0,
                min: 0.0,
                range: 0.0,
                class_count: 0,
                amplitude: 0.0,
            };
        }
        let max = classes
            .iter()
            .map(|c| c.interval.upper)
            .fold(f64::NEG_INFINITY, f64::max);
        let min = classes
            .iter()
            .map(|c| c.interval.lower)
            .fold(f64::INFINITY, f64::min);
        let range = max - min;

        Self {
            max: round4(max),
            min: round4(min),
            range: round4(range),
            class_count: classes.len(),
            amplitude: round4(range / classes.len() as f64),
        }
    }
}

/// Summary of grouped data
///
/// Numbers are rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSummary {
    pub mean: f64,
    /// First class whose cumulative frequency reaches half the total
    pub median_class: ClassPosition,
    /// Most frequent class (first on ties)
    pub modal_class: ClassPosition,
    pub variance: f64,
    pub std_dev: f64,
    /// Third standardized moment
    pub skewness: f64,
    /// Fourth standardized moment minus 3
    pub kurtosis: f64,
    /// Sum of all frequencies
    pub total_frequency: u64,
    pub divisor: DivisorMode,
    pub parameters: GroupedParameters,
}

impl GroupedSummary {
    /// The named statistics in reporting order
    pub fn statistics(&self) -> StatisticSet {
        StatisticSet::new()
            .with("media", self.mean)
            .with("mediana_aproximada", self.median_class.describe_median())
            .with("moda", self.modal_class.describe_modal())
            .with("varianza", self.variance)
            .with("desviacion_estandar", self.std_dev)
            .with("sesgo", self.skewness)
            .with("curtosis", self.kurtosis)
    }
}

/// Frequency-weighted k-th central moment about `center`, divided by the
/// total frequency
pub fn weighted_central_moment(classes: &[ClassFrequency], center: f64, k: i32) -> f64 {
    let total: f64 = classes.iter().map(|c| c.frequency as f64).sum();
    weighted_deviation_sum(classes, center, k) / total
}

fn weighted_deviation_sum(classes: &[ClassFrequency], center: f64, k: i32) -> f64 {
    classes
        .iter()
        .map(|c| c.frequency as f64 * (c.interval.midpoint() - center).powi(k))
        .sum()
}

/// Index of the first class whose cumulative frequency reaches `total / 2`
fn median_class_index(classes: &[ClassFrequency], total: u64) -> usize {
    let half = total as f64 / 2.0;
    let mut cumulative = 0u64;
    classes
        .iter()
        .position(|c| {
            cumulative += c.frequency;
            cumulative as f64 >= half
        })
        .unwrap_or(classes.len() - 1)
}

/// Index of the most frequent class, first one winning ties
fn modal_class_index(classes: &[ClassFrequency]) -> usize {
    let mut best = 0;
    for (i, class) in classes.iter().enumerate() {
        if class.frequency > classes[best].frequency {
            best = i;
        }
    }
    best
}

/// Estimator for grouped data
///
/// # Examples
///
/// ```rust
/// use descriptive_core::DivisorMode;
/// use descriptive_moments::GroupedEstimator;
///
/// let summary = GroupedEstimator::new(DivisorMode::Population)
///     .estimate_labels(&["0-10", "10-20"], &[3, 1])
///     .unwrap();
/// assert_eq!(summary.mean, 7.5);
/// assert_eq!(summary.median_class.describe_median(), "Class 1: 0-10");
/// assert_eq!(summary.modal_class.describe_modal(), "Modal class: 0-10");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedEstimator {
    divisor: DivisorMode,
}

impl GroupedEstimator {
    pub fn new(divisor: DivisorMode) -> Self {
        Self { divisor }
    }

    pub fn divisor(&self) -> DivisorMode {
        self.divisor
    }

    /// Parse `labels`, pair them with `frequencies` and estimate
    ///
    /// Any unparsable label, or lists of different length, fail the whole
    /// request with [`Error::MalformedClass`].
    pub fn estimate_labels<S: AsRef<str>>(
        &self,
        labels: &[S],
        frequencies: &[u64],
    ) -> Result<GroupedSummary> {
        let classes = pair_classes(labels, frequencies)?;
        self.estimate(&classes)
    }

    /// Estimate from already parsed classes
    ///
    /// Fails with [`Error::EmptyDataset`] when the total frequency is zero and
    /// with [`Error::InsufficientData`] when it is one in sample mode.
    #[instrument(skip(self, classes), fields(classes = classes.len(), divisor = %self.divisor))]
    pub fn estimate(&self, classes: &[ClassFrequency]) -> Result<GroupedSummary> {
        let total = classes
            .iter()
            .try_fold(0u64, |acc, c| acc.checked_add(c.frequency))
            .ok_or_else(|| Error::InvalidValue("total frequency overflows".to_string()))?;
        if total == 0 {
            return Err(Error::EmptyDataset(
                "total frequency of grouped data is zero".to_string(),
            ));
        }
        let total_count = usize::try_from(total).map_err(|_| {
            Error::InvalidValue(format!("total frequency {total} is too large"))
        })?;
        let denominator = self.divisor.denominator(total_count)?;
        let total_f = total as f64;

        let mean = classes
            .iter()
            .map(|c| c.interval.midpoint() * c.frequency as f64)
            .sum::<f64>()
            / total_f;

        let variance = weighted_deviation_sum(classes, mean, 2) / denominator;
        let std_dev = variance.sqrt();

        let (skewness, kurtosis) = if std_dev > 0.0 {
            let m3 = weighted_central_moment(classes, mean, 3);
            let m4 = weighted_central_moment(classes, mean, 4);
            (m3 / std_dev.powi(3), m4 / std_dev.powi(4) - 3.0)
        } else {
            // All weight on a single midpoint
            (0.0, 0.0)
        };

        let summary = GroupedSummary {
            mean: round4(mean),
            median_class: ClassPosition::of(classes, median_class_index(classes, total)),
            modal_class: ClassPosition::of(classes, modal_class_index(classes)),
            variance: round4(variance),
            std_dev: round4(std_dev),
            skewness: round4(skewness),
            kurtosis: round4(kurtosis),
            total_frequency: total,
            divisor: self.divisor,
            parameters: GroupedParameters::from_classes(classes),
        };
        debug!(
            mean = summary.mean,
            variance = summary.variance,
            median_class = %summary.median_class,
            modal_class = %summary.modal_class,
            "grouped summary"
        );
        Ok(summary)
    }
}

/// Summarize grouped data given as labels and frequencies
pub fn describe_grouped<S: AsRef<str>>(
    labels: &[S],
    frequencies: &[u64],
    divisor: DivisorMode,
) -> Result<GroupedSummary> {
    GroupedEstimator::new(divisor).estimate_labels(labels, frequencies)
}
