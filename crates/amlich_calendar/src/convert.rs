//! Solar ⇄ lunar date conversion.

use amlich_astro::new_moon_day;
use amlich_time::{CivilDate, civil_from_day_number};
use tracing::{trace, warn};

use crate::error::CalendarError;
use crate::span::{LunarYearSpan, SpanSource, lunation_containing_day};
use crate::types::{LunarDate, LunarDateInfo, MAX_COMPUTABLE_YEAR, MIN_COMPUTABLE_YEAR, RangePolicy};

/// Spans tried on either side of the starting year before giving up.
const MAX_SPAN_STEPS: u32 = 3;

fn unsupported(year: i32) -> CalendarError {
    CalendarError::UnsupportedYear {
        year,
        min: MIN_COMPUTABLE_YEAR,
        max: MAX_COMPUTABLE_YEAR,
    }
}

fn check_computable(year: i32) -> Result<(), CalendarError> {
    if (MIN_COMPUTABLE_YEAR..=MAX_COMPUTABLE_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(unsupported(year))
    }
}

/// Span numbering lunation `k`, searched from the span anchored on `year`.
fn span_containing(
    year: i32,
    k: i64,
    tz_hours: f64,
    spans: &dyn SpanSource,
) -> Result<LunarYearSpan, CalendarError> {
    let mut anchor = year;
    for _ in 0..=MAX_SPAN_STEPS {
        let span = spans.span(anchor, tz_hours);
        if span.contains_lunation(k) {
            return Ok(span);
        }
        anchor += if k < span.month11.k { -1 } else { 1 };
    }
    Err(unsupported(year))
}

/// Low-confidence flag for `year`, or the strict-policy error.
fn check_policy(
    year: i32,
    span: &LunarYearSpan,
    policy: &RangePolicy,
) -> Result<bool, CalendarError> {
    if span.approximate() && policy.strict {
        return Err(CalendarError::NonConvergence {
            year: span.anchor_year,
        });
    }
    if policy.contains(year) {
        return Ok(false);
    }
    if policy.strict {
        return Err(CalendarError::LowConfidence {
            year,
            min: policy.min_year,
            max: policy.max_year,
        });
    }
    warn!(
        year,
        min = policy.min_year,
        max = policy.max_year,
        "converting outside the confident range"
    );
    Ok(true)
}

/// Convert a local civil date/time to the lunar calendar.
///
/// The lunar day is that of the local civil date; time of day only affects
/// `julian_day`. Civil years outside `MIN_COMPUTABLE_YEAR..=MAX_COMPUTABLE_YEAR`
/// fail with `CalendarError::UnsupportedYear`.
pub fn solar_to_lunar(
    civil: &CivilDate,
    tz_hours: f64,
    policy: &RangePolicy,
    spans: &dyn SpanSource,
) -> Result<LunarDateInfo, CalendarError> {
    let julian_day = civil.to_julian_day(tz_hours)?;
    let day_number = civil.day_number()?;
    check_computable(civil.year)?;

    let k = lunation_containing_day(day_number, tz_hours);
    let month_start = new_moon_day(k, tz_hours);
    let month_length = u8::try_from(new_moon_day(k + 1, tz_hours) - month_start)
        .map_err(|_| unsupported(civil.year))?;

    let span = span_containing(civil.year, k, tz_hours, spans)?;
    let low_confidence = check_policy(civil.year, &span, policy)?;

    let (year, month, is_leap_month) = span.label(k - span.month11.k);
    let day = u8::try_from(day_number - month_start + 1).map_err(|_| unsupported(civil.year))?;
    let date = LunarDate {
        year,
        month,
        day,
        is_leap_month,
    };
    trace!(%civil, lunar = %date, "solar_to_lunar");

    Ok(LunarDateInfo {
        date,
        julian_day,
        day_number,
        month_start,
        month_length,
        approximate: span.approximate(),
        low_confidence,
    })
}

fn invalid(lunar: &LunarDate, reason: &'static str) -> CalendarError {
    CalendarError::InvalidLunarDate {
        year: lunar.year,
        month: lunar.month,
        day: lunar.day,
        is_leap_month: lunar.is_leap_month,
        reason,
    }
}

/// Convert a lunar date to its local civil date (at noon).
///
/// Fails when the month is outside 1..=12, a leap month is requested in a
/// year that does not repeat that month, or the day exceeds the month length.
/// Years outside the computable range are rejected before any arithmetic.
pub fn lunar_to_solar(
    lunar: &LunarDate,
    tz_hours: f64,
    spans: &dyn SpanSource,
) -> Result<CivilDate, CalendarError> {
    if !(1..=12).contains(&lunar.month) {
        return Err(invalid(lunar, "month must be in 1..=12"));
    }
    if !(1..=30).contains(&lunar.day) {
        return Err(invalid(lunar, "day must be in 1..=30"));
    }
    check_computable(lunar.year)?;

    let anchor_year = if lunar.month >= 11 {
        lunar.year
    } else {
        lunar.year - 1
    };
    let span = spans.span(anchor_year, tz_hours);
    let month_offset = (i64::from(lunar.month) - 11).rem_euclid(12);
    let offset = match (span.leap_offset.map(i64::from), lunar.is_leap_month) {
        (Some(leap), true) if leap == month_offset + 1 => leap,
        (_, true) => return Err(invalid(lunar, "no such leap month in this year")),
        (Some(leap), false) if month_offset >= leap => month_offset + 1,
        (_, false) => month_offset,
    };

    let k = span.month11.k + offset;
    let start = new_moon_day(k, tz_hours);
    let length = new_moon_day(k + 1, tz_hours) - start;
    if i64::from(lunar.day) > length {
        return Err(invalid(lunar, "day exceeds the month length"));
    }

    let (year, month, day) = civil_from_day_number(start + i64::from(lunar.day) - 1);
    trace!(%lunar, year, month, day, "lunar_to_solar");
    Ok(CivilDate::at_noon(year, month, day))
}
