//! Shared utility functions for BOD crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Date format used for display and CSV output: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Timestamp format used by eBird `obsDt` values: "YYYY-MM-DD HH:MM"
    pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
    }

    /// Parse an eBird `obsDt` value.
    ///
    /// The API reports either a bare date ("2024-05-01") or a date with an
    /// observation time ("2024-05-01 09:23"); the time-of-day is discarded.
    pub fn parse_observation_date(s: &str) -> anyhow::Result<NaiveDate> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, DATETIME_FORMAT) {
            return Ok(dt.date());
        }
        Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
    }

}
