//! Structured success/failure envelope for the session boundary

use crate::report::AnalysisReport;
use descriptive_core::{Error, ErrorKind};
use serde::Serialize;

/// Outcome of an analyze request in boundary form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Success { result: Box<AnalysisReport> },
    Error { kind: ErrorKind, message: String },
}

impl Response {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Kind of the failure, if any
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Success { result } => Some(result),
            Self::Error { .. } => None,
        }
    }
}

impl From<&Error> for Response {
    fn from(err: &Error) -> Self {
        Self::Error {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<descriptive_core::Result<AnalysisReport>> for Response {
    fn from(result: descriptive_core::Result<AnalysisReport>) -> Self {
        match result {
            Ok(report) => Self::Success {
                result: Box::new(report),
            },
            Err(err) => Self::from(&err),
        }
    }
}
