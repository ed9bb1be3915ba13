//! Error types for the FinBuddy advisor
//!
//! Provides a single error taxonomy for the library crate; the binary
//! layer wraps these with anyhow context where needed.

use thiserror::Error;

/// Main error type for the advisor system
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// No data exists for the requested ticker
    #[error("No data found for ticker '{0}'")]
    TickerNotFound(String),

    /// No history row matches the requested date/ticker pair
    #[error("No data found for date {date} and ticker {ticker}")]
    DataNotFound { date: String, ticker: String },

    /// Retrieval was attempted over an empty corpus
    #[error("Retrieval corpus is empty")]
    EmptyCorpus,

    /// Date string could not be parsed
    #[error("Invalid date '{input}': expected {expected}")]
    InvalidDate { input: String, expected: String },

    /// Financial data API errors
    #[error("Financial data API error: {0}")]
    ApiError(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("Advisor error: {0}")]
    Generic(String),
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Convert anyhow errors to AdvisorError
impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Generic(err.to_string())
    }
}
