//! Error types for training and inference.

use std::fmt;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Error type for classifier operations.
#[derive(Debug)]
pub enum ClassifierError {
    /// Input data or hyperparameter rejected before training starts.
    InvalidInput(String),
    /// Two sizes that must agree do not.
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    /// Training labels do not contain exactly two distinct values.
    LabelCount { found: usize },
    /// A label outside the fitted pair of classes.
    UnknownLabel(String),
    /// Training produced a non-finite loss or parameter.
    NumericDegenerate { epoch: usize, value: f64 },
    /// Configuration could not be parsed.
    Config(String),
    /// I/O error while reading configuration.
    Io(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ClassifierError::ShapeMismatch {
                what,
                expected,
                got,
            } => write!(
                f,
                "Shape mismatch in {}: expected {}, got {}",
                what, expected, got
            ),
            ClassifierError::LabelCount { found } => write!(
                f,
                "Expected exactly 2 distinct labels, found {}",
                found
            ),
            ClassifierError::UnknownLabel(label) => {
                write!(f, "Unknown label: {}", label)
            }
            ClassifierError::NumericDegenerate { epoch, value } => write!(
                f,
                "Numeric degenerate: value became {} at epoch {}",
                value, epoch
            ),
            ClassifierError::Config(msg) => write!(f, "Config error: {}", msg),
            ClassifierError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ClassifierError {}

impl From<std::io::Error> for ClassifierError {
    fn from(err: std::io::Error) -> Self {
        ClassifierError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClassifierError {
    fn from(err: serde_json::Error) -> Self {
        ClassifierError::Config(err.to_string())
    }
}
