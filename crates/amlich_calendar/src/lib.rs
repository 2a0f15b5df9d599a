//! Vietnamese lunisolar calendar: month numbering, leap months and
//! solar ⇄ lunar date conversion.
//!
//! This crate provides:
//! - Month-11 anchors (the lunation containing the winter solstice)
//! - Lunar-year spans between consecutive anchors, with leap-month
//!   resolution by the missing-Principal-Term rule
//! - `solar_to_lunar` / `lunar_to_solar` over an injectable `SpanSource`
//!
//! Day boundaries are local civil days in the given UTC offset (UTC+7 for
//! the Vietnamese calendar).

pub mod convert;
pub mod error;
pub mod leap;
pub mod span;
pub mod types;

pub use convert::{lunar_to_solar, solar_to_lunar};
pub use error::CalendarError;
pub use leap::{is_leap_month, leap_month_offset};
pub use span::{DirectSpans, LunarYearSpan, Month11, SpanSource, lunation_containing_day, month11};
pub use types::{
    LunarDate, LunarDateInfo, LunarMonth, MAX_COMPUTABLE_YEAR, MIN_COMPUTABLE_YEAR, RangePolicy,
};
