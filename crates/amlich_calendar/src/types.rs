//! Lunar date types and conversion policy.

use std::fmt;

/// A date in the Vietnamese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Lunar year; changes at Tết (month 1, day 1).
    pub year: i32,
    /// Month number 1..=12. A leap month repeats the preceding number.
    pub month: u8,
    /// Day of the month, 1..=30.
    pub day: u8,
    pub is_leap_month: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }
}

/// `day/month/year`, with `L` after a leap month (`8/6L/2025`).
impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap_month { "L" } else { "" };
        write!(f, "{}/{}{}/{}", self.day, self.month, leap, self.year)
    }
}

/// Result of a solar → lunar conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarDateInfo {
    pub date: LunarDate,
    /// UT Julian Date of the input instant.
    pub julian_day: f64,
    /// Local day number of the input date.
    pub day_number: i64,
    /// Local day number of lunar day 1 of this month.
    pub month_start: i64,
    /// 29 or 30.
    pub month_length: u8,
    /// A bounding winter solstice is an unrefined estimate.
    pub approximate: bool,
    /// The year lies outside the confident range.
    pub low_confidence: bool,
}

/// One month of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// Lunar year the month belongs to.
    pub year: i32,
    pub month: u8,
    pub is_leap_month: bool,
    /// Local day number of day 1.
    pub start_day: i64,
    /// 29 or 30.
    pub length: u8,
}

/// Earliest year the solstice and ΔT series still give a consistent month
/// numbering.
pub const MIN_COMPUTABLE_YEAR: i32 = -4000;

/// Latest year the solstice and ΔT series still give a consistent month
/// numbering.
pub const MAX_COMPUTABLE_YEAR: i32 = 30_000;

/// Which years are trusted, and what to do outside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePolicy {
    pub min_year: i32,
    pub max_year: i32,
    /// Turn low-confidence and approximate results into errors.
    pub strict: bool,
}

impl RangePolicy {
    pub const fn new(min_year: i32, max_year: i32, strict: bool) -> Self {
        Self {
            min_year,
            max_year,
            strict,
        }
    }

    pub const fn contains(&self, year: i32) -> bool {
        year >= self.min_year && year <= self.max_year
    }
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self::new(1900, 2100, false)
    }
}
