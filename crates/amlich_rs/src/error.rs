//! Facade error type.

use amlich_calendar::CalendarError;
use amlich_time::TimeError;
use thiserror::Error;

/// Errors from the `Calendar` facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AmlichError {
    /// Conversion failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Invalid or unparsable configuration.
    #[error("invalid config: {0}")]
    Config(String),
    /// Reading a config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TimeError> for AmlichError {
    fn from(e: TimeError) -> Self {
        Self::Calendar(CalendarError::Time(e))
    }
}
