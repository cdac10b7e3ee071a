//! Frequency tables and class intervals for descriptive statistics
//!
//! This crate turns data into the shapes the estimators and charts consume:
//!
//! - **Frequency tables** of ungrouped data: one row per distinct value in
//!   ascending order, with relative and cumulative columns
//! - **Class intervals** parsed from `"low-high"` labels of grouped data,
//!   with midpoint and width
//! - **Histogram bins** of raw observations, for chart series
//!
//! # Examples
//!
//! ## Frequency Table
//!
//! ```rust
//! use descriptive_frequency::frequency_table;
//!
//! let table = frequency_table(&[5.0, 5.0, 5.0, 3.0, 3.0, 7.0]).unwrap();
//! for row in table.rows() {
//!     println!("{row}");
//! }
//! assert_eq!(table.values(), vec![3.0, 5.0, 7.0]);
//! assert_eq!(table.rows()[2].cumulative_frequency, 6);
//! ```
//!
//! ## Grouped Classes
//!
//! ```rust
//! use descriptive_frequency::pair_classes;
//!
//! let classes = pair_classes(&["0-10", "10-20"], &[3, 1]).unwrap();
//! let midpoints: Vec<f64> = classes.iter().map(|c| c.interval.midpoint()).collect();
//! assert_eq!(midpoints, vec![5.0, 15.0]);
//! ```

pub mod bins;
pub mod builders;
pub mod class;
pub mod types;

pub use bins::{histogram_bins, BinningRule, HistogramBin, MAX_BINS};
pub use builders::{distinct_counts, frequency_table, FrequencyTableBuilder};
pub use class::{pair_classes, ClassFrequency, ClassInterval};
pub use types::{FrequencyRow, FrequencyTable};
