//! The `Calendar` engine: configuration plus a shared span source.

use std::num::NonZeroUsize;

use amlich_astro::{MoonPhase, SolarTerm, moon_phase, solar_term_at};
use amlich_calendar::{
    CalendarError, DirectSpans, LunarDate, LunarDateInfo, LunarMonth, RangePolicy, SpanSource,
    lunar_to_solar, solar_to_lunar,
};
use amlich_canchi::{
    Constellation, NaAm, SexagenaryPair, ZodiacAnimal, constellation_for_day, day_pair, hour_pair,
    month_pair, year_pair,
};
use amlich_time::{CivilDate, TimeError, civil_from_day_number, day_number};
use rayon::prelude::*;
use tracing::debug;

use crate::cache::CachedSpans;
use crate::config::CalendarConfig;
use crate::error::AmlichError;

/// Can Chi of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexagenaryInfo {
    /// Pair of the lunar year.
    pub year: SexagenaryPair,
    /// Pair of the lunar month. A leap month shares the pair of the month it repeats.
    pub month: SexagenaryPair,
    pub day: SexagenaryPair,
    pub hour: SexagenaryPair,
    /// Nạp Âm of the year pair; its element is the year's "mệnh".
    pub year_na_am: NaAm,
    pub zodiac: ZodiacAnimal,
}

/// Everything known about one local civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayInfo {
    pub civil: CivilDate,
    pub lunar: LunarDateInfo,
    pub sexagenary: SexagenaryInfo,
    /// Solar term in effect at the input instant.
    pub solar_term: SolarTerm,
    pub constellation: Constellation,
    pub moon_phase: MoonPhase,
}

/// Conversion engine. `Send + Sync`; share it by reference or `Arc`.
pub struct Calendar {
    config: CalendarConfig,
    policy: RangePolicy,
    spans: Box<dyn SpanSource>,
}

impl Calendar {
    /// Validate `config` and build an engine, with an LRU span cache unless
    /// `cache_capacity` is 0.
    pub fn new(config: CalendarConfig) -> Result<Self, AmlichError> {
        config.validate()?;
        let spans: Box<dyn SpanSource> = match NonZeroUsize::new(config.cache_capacity) {
            Some(capacity) => Box::new(CachedSpans::new(capacity, config.timezone_offset_hours)),
            None => Box::new(DirectSpans),
        };
        debug!(
            tz = config.timezone_offset_hours,
            cache = config.cache_capacity,
            "calendar created"
        );
        Ok(Self::with_span_source(config, spans))
    }

    /// Build an engine over a caller-supplied span source. `config` is not
    /// validated here.
    pub fn with_span_source(config: CalendarConfig, spans: Box<dyn SpanSource>) -> Self {
        Self {
            policy: config.policy(),
            config,
            spans,
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    fn tz(&self) -> f64 {
        self.config.timezone_offset_hours
    }

    /// Lunar date of a local civil date and time.
    pub fn convert(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<LunarDateInfo, AmlichError> {
        self.convert_date(&CivilDate::new(year, month, day, hour, minute, second))
    }

    pub fn convert_date(&self, civil: &CivilDate) -> Result<LunarDateInfo, AmlichError> {
        Ok(solar_to_lunar(civil, self.tz(), &self.policy, self.spans.as_ref())?)
    }

    /// Local civil date (at noon) of a lunar date.
    pub fn to_solar(&self, lunar: &LunarDate) -> Result<CivilDate, AmlichError> {
        Ok(lunar_to_solar(lunar, self.tz(), self.spans.as_ref())?)
    }

    /// The months of lunar year `lunar_year`, month 1 through month 12,
    /// including its leap month if it has one.
    pub fn months(&self, lunar_year: i32) -> Vec<LunarMonth> {
        let tz = self.tz();
        let before = self.spans.span(lunar_year - 1, tz).months();
        let after = self.spans.span(lunar_year, tz).months();
        before
            .into_iter()
            .chain(after)
            .filter(|m| m.year == lunar_year)
            .collect()
    }

    pub fn sexagenary(&self, civil: &CivilDate) -> Result<SexagenaryInfo, AmlichError> {
        let lunar = self.convert_date(civil)?;
        sexagenary_for(civil, &lunar)
    }

    /// Lunar mansion of a civil date.
    pub fn constellation(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Constellation, AmlichError> {
        Ok(constellation_for_day(day_number(year, month, day)?))
    }

    pub fn day_info(&self, civil: &CivilDate) -> Result<DayInfo, AmlichError> {
        let lunar = self.convert_date(civil)?;
        Ok(DayInfo {
            civil: *civil,
            lunar,
            sexagenary: sexagenary_for(civil, &lunar)?,
            solar_term: solar_term_at(lunar.julian_day),
            constellation: constellation_for_day(lunar.day_number),
            moon_phase: moon_phase(lunar.julian_day),
        })
    }

    /// `day_info` for `days` consecutive dates from `start`, at the same time
    /// of day, evaluated in parallel. Results are in date order.
    pub fn scan(&self, start: &CivilDate, days: u32) -> Vec<Result<DayInfo, AmlichError>> {
        let first = match start.day_number() {
            Ok(d) => d,
            Err(e) => return vec![Err(e.into())],
        };
        (0..i64::from(days))
            .into_par_iter()
            .map(|offset| {
                let (year, month, day) = civil_from_day_number(first + offset);
                let civil =
                    CivilDate::new(year, month, day, start.hour, start.minute, start.second);
                self.day_info(&civil)
            })
            .collect()
    }
}

impl std::fmt::Debug for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calendar")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn sexagenary_for(
    civil: &CivilDate,
    lunar: &LunarDateInfo,
) -> Result<SexagenaryInfo, AmlichError> {
    let date = lunar.date;
    let year = year_pair(date.year);
    let month = month_pair(date.year, date.month).ok_or(CalendarError::InvalidLunarDate {
        year: date.year,
        month: date.month,
        day: date.day,
        is_leap_month: date.is_leap_month,
        reason: "month must be in 1..=12",
    })?;
    let day = day_pair(lunar.day_number);
    let hour = hour_pair(day.stem(), civil.hour).ok_or(TimeError::InvalidDate {
        year: civil.year,
        month: civil.month,
        day: civil.day,
        reason: "time of day is out of range",
    })?;
    Ok(SexagenaryInfo {
        year,
        month,
        day,
        hour,
        year_na_am: year.na_am(),
        zodiac: year.branch().animal(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> Calendar {
        Calendar::new(CalendarConfig::default()).unwrap()
    }

    #[test]
    fn calendar_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calendar>();
    }

    #[test]
    fn invalid_config_rejected() {
        let config = CalendarConfig {
            timezone_offset_hours: 20.0,
            ..CalendarConfig::default()
        };
        assert!(matches!(Calendar::new(config), Err(AmlichError::Config(_))));
    }

    #[test]
    fn cache_disabled_gives_same_answer() {
        let uncached = Calendar::new(CalendarConfig {
            cache_capacity: 0,
            ..CalendarConfig::default()
        })
        .unwrap();
        let a = calendar().convert(2025, 8, 1, 12, 0, 0.0).unwrap();
        let b = uncached.convert(2025, 8, 1, 12, 0, 0.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn months_of_leap_year() {
        let months = calendar().months(2025);
        assert_eq!(months.len(), 13);
        assert_eq!(months[0].month, 1);
        assert_eq!(months[12].month, 12);
        let leap: Vec<_> = months.iter().filter(|m| m.is_leap_month).collect();
        assert_eq!(leap.len(), 1);
        assert_eq!(leap[0].month, 6);
    }

    #[test]
    fn months_of_common_year() {
        let months = calendar().months(2024);
        assert_eq!(months.len(), 12);
        assert!(months.iter().all(|m| !m.is_leap_month));
        assert!(months
            .windows(2)
            .all(|w| w[0].start_day + i64::from(w[0].length) == w[1].start_day));
    }

    #[test]
    fn scan_invalid_start_is_single_error() {
        let results = calendar().scan(&CivilDate::at_noon(2023, 2, 30), 5);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
