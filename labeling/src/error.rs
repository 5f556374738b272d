//! Error types for the indicator and labeling engine

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for labeling operations
#[derive(Error, Debug)]
pub enum LabelingError {
    /// Malformed or empty bar sequence
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Window or threshold outside its accepted range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A zero close was used as a return denominator
    #[error("Arithmetic degeneracy: zero close at {timestamp} used as return denominator")]
    ArithmeticDegeneracy {
        timestamp: NaiveDate,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Bar source failed to deliver a series
    #[error("Bar source error for {symbol}: {message}")]
    SourceError {
        symbol: String,
        message: String,
    },

    /// A per-instrument task panicked or was cancelled
    #[error("Task failed: {0}")]
    TaskFailed(String),
}

impl From<serde_yaml::Error> for LabelingError {
    fn from(err: serde_yaml::Error) -> Self {
        LabelingError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for LabelingError {
    fn from(err: std::io::Error) -> Self {
        LabelingError::ConfigError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for LabelingError {
    fn from(err: tokio::task::JoinError) -> Self {
        LabelingError::TaskFailed(err.to_string())
    }
}

/// Result type for labeling operations
pub type LabelingResult<T> = Result<T, LabelingError>;
