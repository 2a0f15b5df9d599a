//! Civil dates, Julian Day Numbers and ΔT.
//!
//! This crate provides:
//! - Gregorian/Julian civil date ↔ integer day number conversions, continuous
//!   across the 1582 reform
//! - `CivilDate`, a local wall-clock date/time with a fixed UTC offset
//! - ΔT (TT − UT) for converting between civil time and the dynamical time
//!   used by the astronomical series

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;

pub use civil::{CivilDate, VIETNAM_UTC_OFFSET_HOURS};
pub use delta_t::{decimal_year, delta_t_days, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, GREGORIAN_START_DAY, J2000_JD, centuries_since_j2000, civil_from_day_number,
    day_number, days_in_month, is_leap_year, jd_to_calendar, local_day_number, local_midnight_jd,
    validate_ymd,
};

/// Largest accepted distance of a civil offset from UT, in hours.
pub const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

/// Validate a timezone offset in hours.
pub fn validate_tz(tz_hours: f64) -> Result<f64, TimeError> {
    if tz_hours.is_finite() && tz_hours.abs() <= MAX_TZ_OFFSET_HOURS {
        Ok(tz_hours)
    } else {
        Err(TimeError::InvalidTimezone(tz_hours))
    }
}
