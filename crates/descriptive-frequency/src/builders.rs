//! Frequency table construction

use crate::types::{FrequencyRow, FrequencyTable};
use descriptive_core::utils::{ensure_finite, round_to};
use descriptive_core::{Error, Result, DECIMAL_PLACES};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Count each distinct value, in ascending order
///
/// `-0.0` and `0.0` count as the same value. Empty input yields an empty
/// vector; NaN or infinite values are an [`Error::InvalidValue`].
pub fn distinct_counts(sample: &[f64]) -> Result<Vec<(f64, usize)>> {
    ensure_finite(sample, "observations")?;

    let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &value in sample {
        *counts.entry(OrderedFloat(value)).or_insert(0) += 1;
    }

    Ok(counts
        .into_iter()
        .map(|(value, count)| (value.into_inner(), count))
        .collect())
}

/// Builds a [`FrequencyTable`] from raw observations
///
/// Rows are emitted in ascending value order regardless of input order, so
/// the cumulative columns describe a proper cumulative distribution.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyTableBuilder {
    decimal_places: u32,
}

impl Default for FrequencyTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTableBuilder {
    /// Create a builder that rounds relative frequencies to 4 decimals
    pub fn new() -> Self {
        Self {
            decimal_places: DECIMAL_PLACES,
        }
    }

    /// Round relative frequencies to `places` decimals instead
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Build the table
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn build(&self, sample: &[f64]) -> Result<FrequencyTable> {
        if sample.is_empty() {
            return Err(Error::empty_input("frequency table"));
        }

        let counts = distinct_counts(sample)?;
        let total = sample.len();
        let total_f = total as f64;

        let mut cumulative = 0;
        let rows: Vec<FrequencyRow> = counts
            .into_iter()
            .map(|(value, frequency)| {
                cumulative += frequency;
                FrequencyRow {
                    value,
                    frequency,
                    relative_frequency: round_to(frequency as f64 / total_f, self.decimal_places),
                    cumulative_frequency: cumulative,
                    cumulative_relative_frequency: round_to(
                        cumulative as f64 / total_f,
                        self.decimal_places,
                    ),
                }
            })
            .collect();

        debug!(distinct = rows.len(), "built frequency table");
        Ok(FrequencyTable::new(rows, total))
    }
}

/// Build a frequency table with default rounding
pub fn frequency_table(sample: &[f64]) -> Result<FrequencyTable> {
    FrequencyTableBuilder::new().build(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use descriptive_core::ErrorKind;

    #[test]
    fn test_distinct_counts_sorted() {
        let counts = distinct_counts(&[5.0, 5.0, 5.0, 3.0, 3.0, 7.0]).unwrap();
        assert_eq!(counts, vec![(3.0, 2), (5.0, 3), (7.0, 1)]);
    }

    #[test]
    fn test_distinct_counts_signed_zero() {
        let counts = distinct_counts(&[0.0, -0.0, 1.0]).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].1, 2);
    }

    #[test]
    fn test_distinct_counts_rejects_nan() {
        let err = distinct_counts(&[1.0, f64::NAN]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_table_ascending_with_cumulative_columns() {
        let table = frequency_table(&[5.0, 5.0, 5.0, 3.0, 3.0, 7.0]).unwrap();

        assert_eq!(table.total_count(), 6);
        assert_eq!(table.values(), vec![3.0, 5.0, 7.0]);
        assert_eq!(table.frequencies(), vec![2, 3, 1]);

        let cumulative: Vec<usize> = table.rows().iter().map(|r| r.cumulative_frequency).collect();
        assert_eq!(cumulative, vec![2, 5, 6]);

        let relative: Vec<f64> = table.rows().iter().map(|r| r.relative_frequency).collect();
        assert_eq!(relative, vec![0.3333, 0.5, 0.1667]);

        let cumulative_relative: Vec<f64> = table
            .rows()
            .iter()
            .map(|r| r.cumulative_relative_frequency)
            .collect();
        assert_eq!(cumulative_relative, vec![0.3333, 0.8333, 1.0]);
    }

    #[test]
    fn test_table_single_value() {
        let table = frequency_table(&[42.0]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].relative_frequency, 1.0);
        assert_eq!(table.rows()[0].cumulative_relative_frequency, 1.0);
        assert_eq!(table.max_frequency(), 1);
    }

    #[test]
    fn test_table_empty_input() {
        let err = frequency_table(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyDataset);
    }

    #[test]
    fn test_custom_precision() {
        let table = FrequencyTableBuilder::new()
            .with_decimal_places(2)
            .build(&[1.0, 2.0, 2.0])
            .unwrap();
        assert_eq!(table.rows()[0].relative_frequency, 0.33);
        assert_eq!(table.rows()[1].relative_frequency, 0.67);
    }

    #[test]
    fn test_relative_frequencies_sum_to_one() {
        let table = frequency_table(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
        assert_abs_diff_eq!(table.relative_frequency_sum(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_table_serializes_as_rows() {
        let table = frequency_table(&[2.0, 2.0]).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "valor": 2.0,
                "frecuencia": 2,
                "frecuencia_relativa": 1.0,
                "frecuencia_acumulada": 2,
                "frecuencia_relativa_acumulada": 1.0
            }])
        );
    }
}
