//! Leap-month resolution.
//!
//! In a 13-lunation year the leap month is the first lunation after month
//! 11 that contains no Principal Term (trung khí). A lunation contains none
//! exactly when the Sun's 30° sector is the same at the local midnights
//! starting it and the following lunation.

use amlich_astro::{new_moon_day, principal_term_sector};
use amlich_time::{civil_from_day_number, local_midnight_jd};
use tracing::debug;

use crate::span::{LunarYearSpan, lunation_containing_day};

/// Lunations searched after month 11.
const MAX_LEAP_SEARCH: u32 = 13;

fn sector_at_day(day: i64, tz_hours: f64) -> u32 {
    principal_term_sector(local_midnight_jd(day, tz_hours))
}

/// Offset after month 11 (lunation `month11_k`) of the first lunation
/// without a Principal Term, or `None` when none is found.
///
/// Only meaningful for a 13-lunation span.
pub fn leap_month_offset(month11_k: i64, tz_hours: f64) -> Option<u32> {
    let mut last = sector_at_day(new_moon_day(month11_k + 1, tz_hours), tz_hours);
    for offset in 1..=MAX_LEAP_SEARCH {
        let next = sector_at_day(
            new_moon_day(month11_k + offset as i64 + 1, tz_hours),
            tz_hours,
        );
        if next == last {
            debug!(month11_k, offset, sector = next, "leap month resolved");
            return Some(offset);
        }
        last = next;
    }
    debug!(month11_k, "no lunation without a principal term");
    None
}

/// Whether the month starting on day `candidate_month_start_day` is the leap
/// month of the lunar year whose month 11 starts on `anchor_month11_day`.
pub fn is_leap_month(
    anchor_month11_day: i64,
    candidate_month_start_day: i64,
    tz_hours: f64,
) -> bool {
    let (year, _, _) = civil_from_day_number(anchor_month11_day);
    let span = LunarYearSpan::compute(year, tz_hours);
    if span.month11.start_day != anchor_month11_day {
        return false;
    }
    let k = lunation_containing_day(candidate_month_start_day, tz_hours);
    if new_moon_day(k, tz_hours) != candidate_month_start_day {
        return false;
    }
    span.leap_offset
        .is_some_and(|leap| k - span.month11.k == i64::from(leap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use amlich_time::day_number;

    use crate::span::month11;

    #[test]
    fn leap_2023_is_fourth_lunation_after_month11() {
        let m = month11(2022, 7.0);
        assert_eq!(leap_month_offset(m.k, 7.0), Some(4));
    }

    #[test]
    fn leap_2025_is_month_6() {
        let m = month11(2024, 7.0);
        assert_eq!(leap_month_offset(m.k, 7.0), Some(8));
    }

    #[test]
    fn is_leap_month_by_days() {
        let anchor = month11(2024, 7.0).start_day;
        let leap_start = day_number(2025, 7, 25).unwrap();
        let regular_start = day_number(2025, 6, 25).unwrap();
        assert!(is_leap_month(anchor, leap_start, 7.0));
        assert!(!is_leap_month(anchor, regular_start, 7.0));
        // not a month start
        assert!(!is_leap_month(anchor, leap_start + 3, 7.0));
    }

    #[test]
    fn wrong_anchor_is_never_leap() {
        let leap_start = day_number(2025, 7, 25).unwrap();
        assert!(!is_leap_month(leap_start, leap_start, 7.0));
    }
}
