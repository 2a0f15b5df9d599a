//! Convenience facade for the amlich Vietnamese lunisolar calendar engine.
//!
//! Bundles configuration, a shared span cache and the per-day lookups of the
//! lower crates behind one `Calendar` value.
//!
//! # Quick start
//!
//! ```rust
//! use amlich_rs::{Calendar, CalendarConfig};
//!
//! let calendar = Calendar::new(CalendarConfig::default()).unwrap();
//! let tet = calendar.convert(2024, 2, 10, 12, 0, 0.0).unwrap();
//! assert_eq!(tet.date.to_string(), "1/1/2024");
//!
//! let can_chi = calendar.sexagenary(&"2024-02-10".parse().unwrap()).unwrap();
//! assert_eq!(can_chi.year.to_string(), "Giáp Thìn");
//! ```

pub mod cache;
pub mod calendar;
pub mod config;
pub mod error;

pub use cache::CachedSpans;
pub use calendar::{Calendar, DayInfo, SexagenaryInfo};
pub use config::CalendarConfig;
pub use error::AmlichError;

// Re-export the types callers need so they can depend on this crate alone.
pub use amlich_astro::{
    MoonPhase, SolarTerm, SolarTermEvent, new_moon_time, solar_term_crossing, winter_solstice,
};
pub use amlich_calendar::{CalendarError, LunarDate, LunarDateInfo, LunarMonth, SpanSource};
pub use amlich_canchi::{
    ALL_ELEMENTS, Constellation, EarthlyBranch, Element, ElementRelation, HeavenlyStem, NaAm,
    SexagenaryPair, ZodiacAnimal, element_compatibility, zodiac_animal,
};
pub use amlich_time::{CivilDate, TimeError, VIETNAM_UTC_OFFSET_HOURS};
