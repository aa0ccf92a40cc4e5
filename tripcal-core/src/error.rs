//! Error types for the tripcal ecosystem.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when converting itinerary text to a calendar.
#[derive(Error, Debug)]
pub enum TripcalError {
    #[error("Day {day} starting from {start} is outside the representable date range")]
    DateOutOfRange { day: u64, start: NaiveDate },

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),
}

/// Result type alias for tripcal operations.
pub type TripcalResult<T> = Result<T, TripcalError>;
