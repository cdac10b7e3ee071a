//! Histogram binning of raw observations for chart series
//!
//! Charts of ungrouped data need bin edges; these follow numpy's `auto`
//! rule so rendered histograms match what users see elsewhere.

use descriptive_core::utils::{ensure_finite, quantile_sorted, sorted};
use descriptive_core::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl HistogramBin {
    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}): count={}", self.left, self.right, self.count)
    }
}

/// Upper bound on the number of bins any rule may produce
pub const MAX_BINS: usize = 1024;

/// Bin-count selection rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinningRule {
    /// The smaller bin width of Sturges and Freedman-Diaconis
    #[default]
    Auto,
    /// log2(n) + 1 bins
    Sturges,
    /// Bin width 2 * IQR * n^(-1/3)
    FreedmanDiaconis,
    /// A fixed number of equal-width bins
    Fixed(usize),
}

impl BinningRule {
    /// Number of bins this rule picks for sorted, non-degenerate data
    fn bin_count(&self, sorted: &[f64]) -> usize {
        let n = sorted.len() as f64;
        let span = sorted[sorted.len() - 1] - sorted[0];
        let sturges_width = span / (n.log2() + 1.0);
        let iqr = quantile_sorted(sorted, 0.75) - quantile_sorted(sorted, 0.25);
        let fd_width = 2.0 * iqr * n.powf(-1.0 / 3.0);

        let width = match self {
            Self::Fixed(bins) => return (*bins).clamp(1, MAX_BINS),
            Self::Sturges => sturges_width,
            Self::FreedmanDiaconis if fd_width > 0.0 => fd_width,
            Self::FreedmanDiaconis => sturges_width,
            Self::Auto if fd_width > 0.0 => fd_width.min(sturges_width),
            Self::Auto => sturges_width,
        };
        ((span / width).ceil() as usize).clamp(1, MAX_BINS)
    }
}

/// Bin `sample` into equal-width bins chosen by `rule`
///
/// When every value is identical a single unit-wide bin centred on the value
/// is returned.
pub fn histogram_bins(sample: &[f64], rule: BinningRule) -> Result<Vec<HistogramBin>> {
    if sample.is_empty() {
        return Err(Error::empty_input("histogram"));
    }
    ensure_finite(sample, "observations")?;

    let sorted = sorted(sample);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if max - min <= 0.0 {
        return Ok(vec![HistogramBin {
            left: min - 0.5,
            right: max + 0.5,
            count: sorted.len(),
        }]);
    }

    let num_bins = rule.bin_count(&sorted);
    let width = (max - min) / num_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..num_bins)
        .map(|i| HistogramBin {
            left: min + i as f64 * width,
            // Ensure last bin includes max
            right: if i == num_bins - 1 { max } else { min + (i + 1) as f64 * width },
            count: 0,
        })
        .collect();

    // Single pass through sorted data
    let mut current = 0;
    for &value in &sorted {
        while current < num_bins - 1 && value >= bins[current].right {
            current += 1;
        }
        bins[current].count += 1;
    }

    Ok(bins)
}
