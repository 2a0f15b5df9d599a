//! Julian Day arithmetic for civil (Gregorian/Julian) calendar dates.
//!
//! Dates on or after 1582-10-15 are Gregorian; earlier dates are in the
//! Julian calendar, so the day number is continuous across the reform
//! (1582-10-04 Julian is immediately followed by 1582-10-15 Gregorian).
//!
//! Day numbers are the integer Julian Day Number of a civil date, i.e. the
//! JD at noon of that date. Clean-room implementation of the classical
//! Fliegel–Van Flandern / Meeus formulas.

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Day number of 1582-10-15, the first Gregorian date.
pub const GREGORIAN_START_DAY: i64 = 2_299_161;

/// Whether `(year, month, day)` falls on or after the Gregorian reform.
fn is_gregorian(year: i32, month: u32, day: u32) -> bool {
    (year, month, day) >= (1582, 10, 15)
}

/// Leap-year rule: Gregorian from 1583 onward, Julian before.
pub fn is_leap_year(year: i32) -> bool {
    if year > 1582 {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year.rem_euclid(4) == 0
    }
}

/// Number of days in a civil month, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// Validate a civil calendar date.
pub fn validate_ymd(year: i32, month: u32, day: u32) -> Result<(), TimeError> {
    let Some(max_day) = days_in_month(year, month) else {
        return Err(TimeError::invalid(year, month, day, "month must be in 1..=12"));
    };
    if day == 0 || day > max_day {
        return Err(TimeError::invalid(
            year,
            month,
            day,
            "day is outside the month",
        ));
    }
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(TimeError::invalid(
            year,
            month,
            day,
            "date skipped by the Gregorian reform",
        ));
    }
    Ok(())
}

/// Integer Julian Day Number of a civil date.
///
/// Fails with [`TimeError::InvalidDate`] before any arithmetic when the date
/// does not exist.
pub fn day_number(year: i32, month: u32, day: u32) -> Result<i64, TimeError> {
    validate_ymd(year, month, day)?;
    Ok(day_number_unchecked(year, month, day))
}

/// Day number without validation. Callers must pass an existing date.
pub(crate) fn day_number_unchecked(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    let base = day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4);
    if is_gregorian(year, month, day) {
        base - y.div_euclid(100) + y.div_euclid(400) - 32_045
    } else {
        base - 32_083
    }
}

/// Civil `(year, month, day)` of an integer day number.
pub fn civil_from_day_number(jdn: i64) -> (i32, u32, u32) {
    let (year, month, day_frac) = jd_to_calendar(jdn as f64);
    (year, month, day_frac.floor() as u32)
}

/// Civil date with fractional day for a (UT) Julian Date.
///
/// Meeus, *Astronomical Algorithms*, ch. 7. The Julian calendar is used
/// below JD 2299160.5.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let a = if z < GREGORIAN_START_DAY as f64 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Local civil day number containing the UT instant `jd`.
///
/// `tz_hours` is the local offset from UT (e.g. `7.0` for Vietnam).
pub fn local_day_number(jd: f64, tz_hours: f64) -> i64 {
    (jd + 0.5 + tz_hours / 24.0).floor() as i64
}

/// UT Julian Date of local midnight starting day number `jdn`.
pub fn local_midnight_jd(jdn: i64, tz_hours: f64) -> f64 {
    jdn as f64 - 0.5 - tz_hours / 24.0
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
