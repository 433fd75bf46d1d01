/// Error types for the bird observation pipeline
use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for pipeline operations.
///
/// Every variant is recovered at the boundary: the affected view degrades
/// to an empty or placeholder state and a message is shown to the user.
/// Nothing here is fatal to the process and nothing triggers a retry.
#[derive(Error, Debug)]
pub enum EbirdError {
    /// HTTP transport failed before a status was received
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The remote endpoint answered with a non-200 status
    #[error("Fetch failed: received status code {0}")]
    FetchFailed(u16),

    /// The response body was not a decodable JSON array of observations
    #[error("Failed to decode API response: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    /// A species filter matched no records
    #[error("No observations matched the requested species")]
    NoMatchingRecords,

    /// A table projection found none of its columns in the record set
    #[error("No displayable columns for this record set")]
    NoDisplayableColumns,

    /// A date-range filter was given a start date after its end date
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Failed to write CSV output
    #[error("Failed to write CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// Type alias for Results using EbirdError
pub type Result<T> = std::result::Result<T, EbirdError>;
