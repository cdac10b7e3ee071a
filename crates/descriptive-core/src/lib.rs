//! Core types for descriptive statistical analysis
//!
//! This crate provides the pieces every other descriptive-stats crate
//! shares:
//!
//! - [`Error`] / [`ErrorKind`]: the four input-validation failures plus chart
//!   rendering failures, each with a stable kind name for boundary reporting
//! - [`DivisorMode`]: sample (n - 1) vs population (n) denominators
//! - [`StatValue`] / [`StatisticSet`]: tagged statistic values, so a mode can
//!   be a number, a list of tied numbers, or absent without resorting to an
//!   untyped map
//! - [`utils`]: rounding, sorting and order-statistic helpers
//!
//! # Example
//!
//! ```rust
//! use descriptive_core::{DivisorMode, StatValue, StatisticSet, utils::round4};
//!
//! let mode = DivisorMode::Sample;
//! assert_eq!(mode.denominator(8).unwrap(), 7.0);
//!
//! let stats = StatisticSet::new()
//!     .with("media", round4(32.0 / 7.0))
//!     .with("moda", StatValue::Missing);
//! assert_eq!(stats.number("media"), Some(4.5714));
//! ```

pub mod divisor;
pub mod error;
pub mod utils;
pub mod value;

// Re-export core types
pub use divisor::DivisorMode;
pub use error::{Error, ErrorKind, Result};
pub use utils::DECIMAL_PLACES;
pub use value::{StatValue, StatisticSet, MISSING_TEXT};
