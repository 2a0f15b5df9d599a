//! Low-precision solar and lunar series for calendar work.
//!
//! This crate provides:
//! - Apparent solar longitude (Meeus ch. 25) with four-term nutation
//! - New Moon instants from the lunation index (Meeus ch. 49)
//! - Winter solstice and the 24 solar terms, located by Newton refinement
//! - Moon age and phase
//!
//! All instants taken and returned are UT Julian Dates. The series are
//! evaluated in TT internally via ΔT.

pub mod error;
pub mod lunar_phase;
pub mod new_moon;
pub mod nutation;
pub(crate) mod search_util;
pub mod solar;
pub mod solar_term;

pub use error::AstroError;
pub use lunar_phase::{ALL_MOON_PHASES, MoonPhase, moon_age_days, moon_phase};
pub use new_moon::{
    LUNATION_EPOCH_JDE, SYNODIC_MONTH_DAYS, lunation_index_near, new_moon_day, new_moon_jde,
    new_moon_time,
};
pub use nutation::nutation_longitude_arcsec;
pub use solar::{normalize_360, solar_longitude};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, SolarTermEvent, principal_term_sector, solar_term_at,
    solar_term_crossing, winter_solstice,
};
