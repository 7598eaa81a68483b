//! Error types for tourcal.

use thiserror::Error;

/// Errors that can occur in tourcal operations.
///
/// The calendar projection itself never fails; these cover the surfaces
/// around it (configuration, stores, export).
#[derive(Error, Debug)]
pub enum TourCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Booking store error: {0}")]
    Store(String),

    #[error("State store error: {0}")]
    State(String),

    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for tourcal operations.
pub type TourCalResult<T> = Result<T, TourCalError>;
