//! Error types for civil date handling.

use thiserror::Error;

/// Errors from civil date validation and conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The civil date (or its time of day) does not exist.
    #[error("invalid date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: &'static str,
    },
    /// A timezone offset outside +/-14 hours.
    #[error("invalid timezone offset: {0} hours")]
    InvalidTimezone(f64),
}

impl TimeError {
    pub(crate) fn invalid(year: i32, month: u32, day: u32, reason: &'static str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            reason,
        }
    }
}
