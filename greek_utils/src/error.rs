//! Error types for greek-utils

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type for greek-utils operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using greek-utils
#[derive(Error, Debug)]
pub enum Error {
    /// The instant pair cannot be split into day and night hours
    #[error("Wrong time range {from} - {to}")]
    InvalidRange {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },

    /// A compact "date + two times" string could not be parsed
    #[error("Wrong time range format: {0}")]
    MalformedRange(String),

    /// Month outside 1..=12
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    /// Weekday name or index outside the known vocabulary
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    /// Year/month/day combination that does not exist on the calendar
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Date string with the wrong shape for the requested conversion
    #[error("Malformed date: {0}")]
    MalformedDate(String),

    /// Greek-formatted number that does not parse
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Operator string not in the comparison table
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// Values whose types cannot be compared with the requested operator
    #[error("Incomparable values: {0}")]
    IncomparableValues(String),

    /// Settings file missing, unreadable or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
