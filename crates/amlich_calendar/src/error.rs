//! Error types for lunar calendar conversion.

use amlich_astro::AstroError;
use amlich_time::TimeError;
use thiserror::Error;

/// Errors from solar ⇄ lunar conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The civil date does not exist.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid astronomical query.
    #[error("astronomy error: {0}")]
    Astro(#[from] AstroError),
    /// The lunar date does not exist.
    #[error("invalid lunar date {day}/{month}/{year} (leap: {is_leap_month}): {reason}")]
    InvalidLunarDate {
        year: i32,
        month: u8,
        day: u8,
        is_leap_month: bool,
        reason: &'static str,
    },
    /// Winter solstice refinement did not converge (strict policy only).
    #[error("winter solstice of {year} did not converge")]
    NonConvergence { year: i32 },
    /// Year outside the confident range (strict policy only).
    #[error("year {year} outside confident range {min}..={max}")]
    LowConfidence { year: i32, min: i32, max: i32 },
    /// Year outside the range the solar and lunar series can number at all.
    #[error("year {year} outside computable range {min}..={max}")]
    UnsupportedYear { year: i32, min: i32, max: i32 },
}
