//! Estimators of central tendency, dispersion and shape
//!
//! This crate provides the two estimator paths of descriptive analysis:
//!
//! - [`UngroupedEstimator`]: mean, median, mode, variance, standard
//!   deviation, minimum, maximum and range of raw observations
//! - [`GroupedEstimator`]: weighted mean, median class, modal class,
//!   variance, standard deviation, skewness and excess kurtosis of
//!   class/frequency data, using class midpoints
//!
//! Both honour a [`DivisorMode`](descriptive_core::DivisorMode) selecting
//! the sample (n - 1) or population (n) denominator.
//!
//! # Mode Policy
//!
//! | Counts | Reported mode |
//! |--------|---------------|
//! | one value at the highest count | that value |
//! | every distinct value tied | no mode |
//! | some values tied at the highest count | all tied values |
//!
//! # Examples
//!
//! ```rust
//! use descriptive_core::{DivisorMode, StatValue};
//! use descriptive_moments::{describe_grouped, describe_ungrouped};
//!
//! let raw = describe_ungrouped(&[1.0, 1.0, 2.0, 2.0, 3.0], DivisorMode::Sample).unwrap();
//! assert_eq!(
//!     raw.statistics().get("moda"),
//!     Some(&StatValue::NumberList(vec![1.0, 2.0]))
//! );
//!
//! let grouped = describe_grouped(&["0-10", "10-20"], &[3, 1], DivisorMode::Sample).unwrap();
//! assert_eq!(grouped.mean, 7.5);
//! ```

pub mod grouped;
pub mod mode;
pub mod ungrouped;

pub use grouped::{
    describe_grouped, weighted_central_moment, ClassPosition, GroupedEstimator,
    GroupedParameters, GroupedSummary,
};
pub use mode::{detect_mode, Mode};
pub use ungrouped::{describe_ungrouped, SkewDirection, UngroupedEstimator, UngroupedSummary};
