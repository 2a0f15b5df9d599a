//! The sexagenary (Can Chi) calendar and its companion cycles.
//!
//! This crate provides:
//! - Heavenly Stems and Earthly Branches with polarity, element and zodiac
//! - Year, month, day and hour sexagenary pairs
//! - The Five Elements and their generating/overcoming relations
//! - Nạp Âm (sound element) of each sexagenary pair
//! - The 28 lunar mansions as a weekday-aligned day cycle
//!
//! Everything here is table lookup and modular arithmetic over day numbers
//! and lunar years; nothing depends on ephemerides.

pub mod branch;
pub mod constellation;
pub mod element;
pub mod na_am;
pub mod sexagenary;
pub mod stem;

pub use branch::{ALL_ANIMALS, ALL_BRANCHES, EarthlyBranch, ZodiacAnimal};
pub use constellation::{
    ALL_CONSTELLATIONS, ALL_LUMINARIES, Constellation, Luminary, Quadrant, constellation_for_day,
    constellation_for_jd,
};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, element_compatibility};
pub use na_am::{ALL_NA_AM, NaAm};
pub use sexagenary::{SexagenaryPair, day_pair, hour_pair, month_pair, year_pair, zodiac_animal};
pub use stem::{ALL_STEMS, HeavenlyStem, Polarity};
