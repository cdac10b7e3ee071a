//! Class intervals parsed from `"low-high"` labels

use descriptive_core::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A class interval of grouped data
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassInterval {
    /// Lower bound
    pub lower: f64,
    /// Upper bound (never below `lower`)
    pub upper: f64,
}

impl ClassInterval {
    /// Create a class interval from its bounds
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::MalformedClass(format!(
                "bounds must be finite, got {lower} and {upper}"
            )));
        }
        if lower > upper {
            return Err(Error::MalformedClass(format!(
                "lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Parse a `"low-high"` label
    ///
    /// The separator is the first `-` that is neither the leading character
    /// nor directly preceded by `-`, `e` or `E`, so negative bounds and
    /// exponents are accepted: `"-10--5"` is `[-10, -5]` and `"1e-3-2"` is
    /// `[0.001, 2]`. Whitespace around either bound is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descriptive_frequency::ClassInterval;
    ///
    /// let class = ClassInterval::parse("10-20").unwrap();
    /// assert_eq!(class.midpoint(), 15.0);
    /// assert_eq!(class.width(), 10.0);
    ///
    /// let negative = ClassInterval::parse("-10--5").unwrap();
    /// assert_eq!((negative.lower, negative.upper), (-10.0, -5.0));
    ///
    /// assert!(ClassInterval::parse("10").is_err());
    /// ```
    pub fn parse(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        let split = separator_index(trimmed)
            .ok_or_else(|| Error::malformed_label(label, "missing '-' separator"))?;

        let lower = parse_bound(label, &trimmed[..split], "lower")?;
        let upper = parse_bound(label, &trimmed[split + 1..], "upper")?;

        if lower > upper {
            return Err(Error::malformed_label(
                label,
                "lower bound exceeds upper bound",
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Get the center point of the class
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Get the width of the class
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl FromStr for ClassInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ClassInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lower, self.upper)
    }
}

fn separator_index(label: &str) -> Option<usize> {
    let bytes = label.as_bytes();
    (1..bytes.len()).find(|&i| bytes[i] == b'-' && !matches!(bytes[i - 1], b'-' | b'e' | b'E'))
}

fn parse_bound(label: &str, text: &str, which: &str) -> Result<f64> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::malformed_label(
            label,
            &format!("{which} bound '{text}' is not a finite number"),
        )),
    }
}

/// A parsed class paired with its label and frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassFrequency {
    /// The label exactly as submitted
    pub label: String,
    /// Parsed bounds
    pub interval: ClassInterval,
    /// Number of observations in the class
    pub frequency: u64,
}

impl ClassFrequency {
    /// Parse `label` and pair it with `frequency`
    pub fn parse(label: impl Into<String>, frequency: u64) -> Result<Self> {
        let label = label.into();
        let interval = ClassInterval::parse(&label)?;
        Ok(Self {
            label,
            interval,
            frequency,
        })
    }
}

/// Pair parallel label and frequency lists, failing on the first bad label
///
/// Lists of different length are a [`Error::MalformedClass`] error.
pub fn pair_classes<S: AsRef<str>>(labels: &[S], frequencies: &[u64]) -> Result<Vec<ClassFrequency>> {
    if labels.len() != frequencies.len() {
        return Err(Error::size_mismatch(labels.len(), frequencies.len()));
    }
    labels
        .iter()
        .zip(frequencies)
        .map(|(label, &frequency)| ClassFrequency::parse(label.as_ref(), frequency))
        .collect()
}
