//! Local civil date/time.
//!
//! Provides `CivilDate`, the input type of the engine: a wall-clock date and
//! time in a fixed local offset (UTC+7 by default). Conversion to a UT Julian
//! Date subtracts the offset.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{day_number, jd_to_calendar, validate_ymd};

/// Vietnam's civil time offset from UT, in hours.
pub const VIETNAM_UTC_OFFSET_HOURS: f64 = 7.0;

/// Civil calendar date with local time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// A date at local noon.
    pub fn at_noon(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 12, 0, 0.0)
    }

    /// Check the calendar date and the time of day.
    pub fn validate(&self) -> Result<(), TimeError> {
        validate_ymd(self.year, self.month, self.day)?;
        if self.hour > 23 || self.minute > 59 || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::invalid(
                self.year,
                self.month,
                self.day,
                "time of day is out of range",
            ));
        }
        Ok(())
    }

    /// Integer Julian Day Number of the civil date (time of day ignored).
    pub fn day_number(&self) -> Result<i64, TimeError> {
        self.validate()?;
        day_number(self.year, self.month, self.day)
    }

    /// Hours since local midnight.
    pub fn hours_of_day(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// UT Julian Date of this local date/time.
    pub fn to_julian_day(&self, tz_hours: f64) -> Result<f64, TimeError> {
        let jdn = self.day_number()?;
        Ok(jdn as f64 - 0.5 + (self.hours_of_day() - tz_hours) / 24.0)
    }

    /// Local civil date/time of a UT Julian Date.
    pub fn from_julian_day(jd: f64, tz_hours: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd + tz_hours / 24.0);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss`
/// (a space may replace the `T`). A bare date is taken at local noon.
impl FromStr for CivilDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let mut fields = date_part.splitn(3, '-');
        let (year, month, day) = match (fields.next(), fields.next(), fields.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(format!("expected YYYY-MM-DD, got '{s}'")),
        };
        let year: i32 = year.parse().map_err(|_| format!("bad year in '{s}'"))?;
        let month: u32 = month.parse().map_err(|_| format!("bad month in '{s}'"))?;
        let day: u32 = day.parse().map_err(|_| format!("bad day in '{s}'"))?;

        let Some(time_part) = time_part else {
            return Ok(Self::at_noon(year, month, day));
        };
        let mut parts = time_part.split(':');
        let hour: u32 = parts
            .next()
            .ok_or_else(|| format!("missing hour in '{s}'"))?
            .parse()
            .map_err(|_| format!("bad hour in '{s}'"))?;
        let minute: u32 = match parts.next() {
            Some(m) => m.parse().map_err(|_| format!("bad minute in '{s}'"))?,
            None => 0,
        };
        let second: f64 = match parts.next() {
            Some(sec) => sec.parse().map_err(|_| format!("bad second in '{s}'"))?,
            None => 0.0,
        };
        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_in_vietnam_is_five_ut() {
        let d = CivilDate::at_noon(2000, 1, 1);
        let jd = d.to_julian_day(VIETNAM_UTC_OFFSET_HOURS).unwrap();
        // 2000-01-01 05:00 UT
        assert!((jd - (2_451_544.5 + 5.0 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn utc_noon_is_jdn() {
        let d = CivilDate::at_noon(2000, 1, 1);
        let jd = d.to_julian_day(0.0).unwrap();
        assert!((jd - 2_451_545.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_time_rejected() {
        assert!(CivilDate::new(2024, 1, 1, 24, 0, 0.0).validate().is_err());
        assert!(CivilDate::new(2024, 1, 1, 0, 60, 0.0).validate().is_err());
        assert!(CivilDate::new(2024, 1, 1, 0, 0, 60.0).validate().is_err());
        assert!(CivilDate::new(2024, 1, 1, 23, 59, 59.5).validate().is_ok());
    }

    #[test]
    fn invalid_date_fails_before_conversion() {
        let err = CivilDate::at_noon(2023, 2, 29).to_julian_day(7.0).unwrap_err();
        assert!(matches!(err, TimeError::InvalidDate { month: 2, day: 29, .. }));
    }

    #[test]
    fn julian_day_roundtrip_keeps_wall_clock() {
        let d = CivilDate::new(2024, 2, 10, 5, 59, 0.0);
        let jd = d.to_julian_day(7.0).unwrap();
        let back = CivilDate::from_julian_day(jd, 7.0);
        assert_eq!((back.year, back.month, back.day), (2024, 2, 10));
        assert_eq!(back.hour, 5);
        assert!(back.minute == 58 || back.minute == 59);
    }

    #[test]
    fn parse_date_only() {
        let d: CivilDate = "2024-02-10".parse().unwrap();
        assert_eq!(d, CivilDate::at_noon(2024, 2, 10));
    }

    #[test]
    fn parse_date_time() {
        let d: CivilDate = "2024-02-10T08:30".parse().unwrap();
        assert_eq!(d, CivilDate::new(2024, 2, 10, 8, 30, 0.0));
        let d: CivilDate = "2024-02-10 23:15:30".parse().unwrap();
        assert_eq!(d.second, 30.0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2024/02/10".parse::<CivilDate>().is_err());
        assert!("2024-xx-10".parse::<CivilDate>().is_err());
    }

    #[test]
    fn display_format() {
        let d = CivilDate::new(2024, 2, 10, 8, 5, 0.0);
        assert_eq!(d.to_string(), "2024-02-10 08:05:00");
    }
}
