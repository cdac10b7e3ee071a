//! Core types for frequency table representation

use serde::{Serialize, Serializer};
use std::fmt;

/// One distinct value of a frequency table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    /// The distinct observed value
    #[serde(rename = "valor")]
    pub value: f64,
    /// Number of observations equal to `value`
    #[serde(rename = "frecuencia")]
    pub frequency: usize,
    /// `frequency / n`, rounded to 4 decimals
    #[serde(rename = "frecuencia_relativa")]
    pub relative_frequency: f64,
    /// Observations less than or equal to `value`
    #[serde(rename = "frecuencia_acumulada")]
    pub cumulative_frequency: usize,
    /// `cumulative_frequency / n`, rounded to 4 decimals
    #[serde(rename = "frecuencia_relativa_acumulada")]
    pub cumulative_relative_frequency: f64,
}

impl fmt::Display for FrequencyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: f={} fr={:.4} F={} Fr={:.4}",
            self.value,
            self.frequency,
            self.relative_frequency,
            self.cumulative_frequency,
            self.cumulative_relative_frequency
        )
    }
}

/// Frequency table of ungrouped data, one row per distinct value in
/// ascending order
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
    total_count: usize,
}

impl FrequencyTable {
    /// Create a new frequency table
    pub fn new(rows: Vec<FrequencyRow>, total_count: usize) -> Self {
        Self { rows, total_count }
    }

    /// Get the rows
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    /// Get the number of distinct values
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the total count of observations
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Distinct values in ascending order
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.value).collect()
    }

    /// Absolute frequencies in row order
    pub fn frequencies(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.frequency).collect()
    }

    /// Highest absolute frequency (0 for an empty table)
    pub fn max_frequency(&self) -> usize {
        self.rows.iter().map(|row| row.frequency).max().unwrap_or(0)
    }

    /// Sum of the (rounded) relative frequencies
    pub fn relative_frequency_sum(&self) -> f64 {
        self.rows.iter().map(|row| row.relative_frequency).sum()
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequency table (n = {}):", self.total_count)?;
        for row in &self.rows {
            writeln!(f, "  {row}")?;
        }
        Ok(())
    }
}
