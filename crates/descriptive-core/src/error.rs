//! Error types for descriptive statistical analysis
//!
//! Provides a unified error type for all descriptive-stats crates. Every
//! variant maps onto an [`ErrorKind`] so the session boundary can report a
//! structured `{kind, message}` failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Core error type for descriptive statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Zero observations, or zero total frequency
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Not enough data points for the requested divisor
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Unparsable class label, or classes and frequencies of different length
    #[error("Malformed class: {0}")]
    MalformedClass(String),

    /// Non-numeric or non-finite entry in the input
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// The chart collaborator failed to produce an image
    #[error("Render error: {0}")]
    Render(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant of [`Error`] as reported at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "EmptyDatasetError")]
    EmptyDataset,
    #[serde(rename = "InsufficientDataError")]
    InsufficientData,
    #[serde(rename = "MalformedClassError")]
    MalformedClass,
    #[serde(rename = "InvalidValueError")]
    InvalidValue,
    #[serde(rename = "RenderError")]
    Render,
}

impl ErrorKind {
    /// Get the name of this error kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmptyDataset => "EmptyDatasetError",
            Self::InsufficientData => "InsufficientDataError",
            Self::MalformedClass => "MalformedClassError",
            Self::InvalidValue => "InvalidValueError",
            Self::Render => "RenderError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions for common error patterns

impl Error {
    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyDataset(_) => ErrorKind::EmptyDataset,
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::MalformedClass(_) => ErrorKind::MalformedClass,
            Self::InvalidValue(_) => ErrorKind::InvalidValue,
            Self::Render(_) => ErrorKind::Render,
        }
    }

    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyDataset(format!("{operation} requires at least one observation"))
    }

    /// Create an error for classes and frequencies of different length
    pub fn size_mismatch(classes: usize, frequencies: usize) -> Self {
        Self::MalformedClass(format!(
            "Size mismatch: {classes} classes but {frequencies} frequencies"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str, index: usize) -> Self {
        Self::InvalidValue(format!("{context} contains a NaN or infinite value at position {index}"))
    }

    /// Create an error for an unparsable class label
    pub fn malformed_label(label: &str, reason: &str) -> Self {
        Self::MalformedClass(format!("'{label}': {reason}"))
    }
}
