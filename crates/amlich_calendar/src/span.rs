//! Lunar-year spans anchored on month 11.
//!
//! Month 11 is the lunation containing the winter solstice. Everything from
//! one month 11 up to (not including) the next is numbered together: 12
//! lunations in a common year, 13 when a leap month is inserted.

use amlich_astro::{lunation_index_near, new_moon_day, winter_solstice};
use amlich_time::local_day_number;

use crate::leap::leap_month_offset;
use crate::types::LunarMonth;

/// Month-11 spacing above which the span holds 13 lunations.
const COMMON_YEAR_MAX_DAYS: i64 = 365;

/// Cap on lunation steps away from the mean-phase estimate.
const MAX_LUNATION_STEPS: u32 = 64;

/// The month-11 lunation of a civil year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Month11 {
    /// Lunation index.
    pub k: i64,
    /// Local day number of its first day.
    pub start_day: i64,
    /// UT Julian Date of the winter solstice it contains.
    pub solstice_jd: f64,
    /// The solstice is an unrefined estimate.
    pub approximate: bool,
}

/// Lunation whose local month contains day number `day`.
///
/// Steps at most `MAX_LUNATION_STEPS` from the mean-phase estimate, so far
/// outside the computable years the result may not bracket `day`.
pub fn lunation_containing_day(day: i64, tz_hours: f64) -> i64 {
    // mean New Moon near the local midnight starting `day`
    let mut k = lunation_index_near(day as f64 - 0.5 - tz_hours / 24.0);
    for _ in 0..MAX_LUNATION_STEPS {
        if new_moon_day(k + 1, tz_hours) <= day {
            k += 1;
        } else if new_moon_day(k, tz_hours) > day {
            k -= 1;
        } else {
            break;
        }
    }
    k
}

/// Month 11 of civil `year`.
pub fn month11(year: i32, tz_hours: f64) -> Month11 {
    let ws = winter_solstice(year);
    let k = lunation_containing_day(local_day_number(ws.jd, tz_hours), tz_hours);
    Month11 {
        k,
        start_day: new_moon_day(k, tz_hours),
        solstice_jd: ws.jd,
        approximate: ws.approximate,
    }
}

/// Months from month 11 of `anchor_year` to month 11 of the next year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarYearSpan {
    pub anchor_year: i32,
    pub month11: Month11,
    pub next_month11: Month11,
    /// Lunation offset after month 11 of the leap month, if any.
    pub leap_offset: Option<u32>,
    pub tz_hours: f64,
}

impl LunarYearSpan {
    pub fn compute(anchor_year: i32, tz_hours: f64) -> Self {
        let m11 = month11(anchor_year, tz_hours);
        let next = month11(anchor_year + 1, tz_hours);
        let leap_offset = if next.start_day - m11.start_day > COMMON_YEAR_MAX_DAYS {
            leap_month_offset(m11.k, tz_hours)
        } else {
            None
        };
        Self {
            anchor_year,
            month11: m11,
            next_month11: next,
            leap_offset,
            tz_hours,
        }
    }

    /// Number of lunations in the span (12 or 13).
    pub fn lunation_count(&self) -> i64 {
        self.next_month11.k - self.month11.k
    }

    /// Whether lunation `k` is numbered by this span.
    pub fn contains_lunation(&self, k: i64) -> bool {
        (self.month11.k..self.next_month11.k).contains(&k)
    }

    /// Either bounding solstice is an unrefined estimate.
    pub fn approximate(&self) -> bool {
        self.month11.approximate || self.next_month11.approximate
    }

    /// Month number, leap flag and lunar year of lunation `k11 + offset`.
    pub(crate) fn label(&self, offset: i64) -> (i32, u8, bool) {
        let (month, is_leap) = match self.leap_offset {
            Some(leap) if offset >= leap as i64 => (offset + 10, offset == leap as i64),
            _ => (offset + 11, false),
        };
        let month = if month > 12 { month - 12 } else { month };
        let year = if month >= 11 {
            self.anchor_year
        } else {
            self.anchor_year + 1
        };
        (year, month as u8, is_leap)
    }

    /// The 12 or 13 months of the span, in order.
    pub fn months(&self) -> Vec<LunarMonth> {
        (0..self.lunation_count())
            .map(|offset| {
                let k = self.month11.k + offset;
                let start_day = new_moon_day(k, self.tz_hours);
                let (year, month, is_leap_month) = self.label(offset);
                LunarMonth {
                    year,
                    month,
                    is_leap_month,
                    start_day,
                    length: (new_moon_day(k + 1, self.tz_hours) - start_day) as u8,
                }
            })
            .collect()
    }
}

/// Where conversion gets its year spans.
///
/// Implementations must return exactly `LunarYearSpan::compute(year, tz)`;
/// they may memoize.
pub trait SpanSource: Send + Sync {
    fn span(&self, anchor_year: i32, tz_hours: f64) -> LunarYearSpan;
}

/// Computes every span on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectSpans;

impl SpanSource for DirectSpans {
    fn span(&self, anchor_year: i32, tz_hours: f64) -> LunarYearSpan {
        LunarYearSpan::compute(anchor_year, tz_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amlich_time::day_number;

    #[test]
    fn month11_2023_starts_dec_13() {
        let m = month11(2023, 7.0);
        assert_eq!(m.start_day, day_number(2023, 12, 13).unwrap());
        assert!(!m.approximate);
    }

    #[test]
    fn span_2022_has_leap_after_month_2() {
        let span = LunarYearSpan::compute(2022, 7.0);
        assert_eq!(span.lunation_count(), 13);
        assert_eq!(span.leap_offset, Some(4));
        assert_eq!(span.label(4), (2023, 2, true));
        assert_eq!(span.label(5), (2023, 3, false));
    }

    #[test]
    fn span_2032_is_common() {
        let span = LunarYearSpan::compute(2032, 7.0);
        assert_eq!(span.lunation_count(), 12);
        assert_eq!(span.leap_offset, None);
        assert_eq!(span.label(0), (2032, 11, false));
        assert_eq!(span.label(2), (2033, 1, false));
        assert_eq!(span.label(11), (2033, 10, false));
    }

    #[test]
    fn months_cover_span() {
        let span = LunarYearSpan::compute(2024, 7.0);
        let months = span.months();
        assert_eq!(months.len(), 13);
        assert_eq!(months[0].start_day, span.month11.start_day);
        for pair in months.windows(2) {
            assert_eq!(pair[0].start_day + pair[0].length as i64, pair[1].start_day);
        }
        assert_eq!(months.iter().filter(|m| m.is_leap_month).count(), 1);
    }

    #[test]
    fn containing_day_brackets() {
        let day = day_number(2024, 2, 10).unwrap();
        let k = lunation_containing_day(day, 7.0);
        assert_eq!(new_moon_day(k, 7.0), day);
        let k_prev = lunation_containing_day(day - 1, 7.0);
        assert_eq!(k_prev, k - 1);
    }
}
