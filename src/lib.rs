//! Descriptive statistics for raw samples and grouped frequency data
//!
//! This crate re-exports the workspace crates:
//!
//! - [`descriptive_core`]: errors, divisor modes, tagged statistic values, rounding
//! - [`descriptive_frequency`]: frequency tables, class intervals, histogram bins
//! - [`descriptive_moments`]: ungrouped and grouped estimators
//! - [`descriptive_session`]: per-caller configuration and the analyze boundary
//!
//! # Example
//!
//! ```rust
//! use descriptive_stats::prelude::*;
//!
//! let mut session = AnalysisSession::new();
//! let report = session
//!     .analyze(&AnalyzeRequest::ungrouped(&[1.0, 1.0, 2.0, 2.0, 3.0]))
//!     .unwrap();
//! assert_eq!(
//!     report.statistics().get("moda"),
//!     Some(&StatValue::NumberList(vec![1.0, 2.0]))
//! );
//!
//! session.configure(ConfigureRequest::new(true, true));
//! let response = session.respond(&AnalyzeRequest::grouped(&["0-10", "10"], &[3, 1]));
//! assert_eq!(response.error_kind(), Some(ErrorKind::MalformedClass));
//! ```

pub use descriptive_core;
pub use descriptive_frequency;
pub use descriptive_moments;
pub use descriptive_session;

/// Commonly used types
pub mod prelude {
    pub use descriptive_core::{DivisorMode, Error, ErrorKind, StatValue, StatisticSet};
    pub use descriptive_frequency::{frequency_table, ClassInterval, FrequencyTable};
    pub use descriptive_moments::{describe_grouped, describe_ungrouped, Mode};
    pub use descriptive_session::{
        AnalysisReport, AnalysisSession, AnalyzeRequest, ChartRenderer, ConfigureRequest,
        Response,
    };
}
