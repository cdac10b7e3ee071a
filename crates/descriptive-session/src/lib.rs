//! Analysis sessions for descriptive statistics
//!
//! An [`AnalysisSession`] keeps the configuration chosen by a caller (sample
//! or population divisor, ungrouped or grouped data) together with the last
//! dataset of each layout, and exposes the two operations of the analysis
//! boundary:
//!
//! - [`AnalysisSession::configure`] stores a [`ConfigureRequest`]
//! - [`AnalysisSession::analyze`] decodes an [`AnalyzeRequest`], runs the
//!   matching estimator and returns an [`AnalysisReport`]
//!
//! [`AnalysisSession::respond`] wraps `analyze` in a [`Response`] envelope
//! carrying either the report or a `{kind, message}` failure.
//!
//! Charts are delegated to a [`ChartRenderer`]. The default
//! [`NullChartRenderer`] draws nothing, so reports carry only the prepared
//! [`ChartSeries`].
//!
//! # Example
//!
//! ```rust
//! use descriptive_session::{AnalysisSession, AnalyzeRequest, ConfigureRequest};
//!
//! let mut session = AnalysisSession::new();
//! session.configure(ConfigureRequest::new(true, true));
//!
//! let response = session.respond(&AnalyzeRequest::grouped(&["0-10", "10-20"], &[3, 1]));
//! let report = response.report().unwrap();
//! assert_eq!(report.statistics().number("media"), Some(7.5));
//! assert_eq!(report.statistics().number("varianza"), Some(25.0));
//! ```

pub mod chart;
pub mod config;
pub mod report;
pub mod request;
pub mod response;
pub mod session;

pub use chart::{render_charts, ChartImage, ChartRenderer, ChartSeries, Charts, NullChartRenderer};
pub use config::{Acknowledgement, AnalysisConfig, ConfigureRequest, DataLayout};
pub use report::{AnalysisReport, GroupedReport, UngroupedReport};
pub use request::AnalyzeRequest;
pub use response::Response;
pub use session::AnalysisSession;
