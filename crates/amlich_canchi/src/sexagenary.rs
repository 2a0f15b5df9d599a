//! Sexagenary (Can Chi) pairs for years, months, days and hours.
//!
//! A pair combines a Heavenly Stem and an Earthly Branch of equal parity,
//! giving 60 combinations. Cycle index `n` in 0..60 has stem `n mod 10` and
//! branch `n mod 12`; conversely `n = (6·stem − 5·branch) mod 60`.

use std::fmt;

use crate::branch::{EarthlyBranch, ZodiacAnimal};
use crate::na_am::{ALL_NA_AM, NaAm};
use crate::stem::HeavenlyStem;

/// Month-1 stem index by year stem mod 5: Bính, Mậu, Canh, Nhâm, Giáp.
const MONTH_STEM_START: [i64; 5] = [2, 4, 6, 8, 0];

/// Tý-hour stem index by day stem mod 5: Giáp, Bính, Mậu, Canh, Nhâm.
const HOUR_STEM_START: [i64; 5] = [0, 2, 4, 6, 8];

/// A valid stem/branch combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SexagenaryPair {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl SexagenaryPair {
    /// `None` when stem and branch differ in parity (no such pair exists).
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pair at cycle index `n` in 0..60 (0 = Giáp Tý).
    pub const fn from_cycle_index(n: u8) -> Option<Self> {
        if n < 60 {
            Some(Self::from_cycle(n as i64))
        } else {
            None
        }
    }

    /// Pair at `n` modulo 60.
    pub const fn from_cycle(n: i64) -> Self {
        Self {
            stem: HeavenlyStem::from_cycle(n),
            branch: EarthlyBranch::from_cycle(n),
        }
    }

    pub const fn stem(&self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(&self) -> EarthlyBranch {
        self.branch
    }

    /// 0-based position in the 60-cycle.
    pub const fn cycle_index(&self) -> u8 {
        let n = 6 * self.stem.index() as i32 - 5 * self.branch.index() as i32;
        n.rem_euclid(60) as u8
    }

    /// 1-based position in the 60-cycle.
    pub const fn position(&self) -> u8 {
        self.cycle_index() + 1
    }

    pub const fn na_am(&self) -> NaAm {
        ALL_NA_AM[self.cycle_index() as usize / 2]
    }
}

impl fmt::Display for SexagenaryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stem.name(), self.branch.name())
    }
}

/// Can Chi of a lunar year.
pub const fn year_pair(lunar_year: i32) -> SexagenaryPair {
    SexagenaryPair::from_cycle(lunar_year as i64 - 4)
}

/// Can Chi of a lunar month (1..=12) in `lunar_year`.
///
/// Month 1 is always a Dần month. A leap month takes the pair of the month
/// it repeats.
pub const fn month_pair(lunar_year: i32, lunar_month: u8) -> Option<SexagenaryPair> {
    if lunar_month < 1 || lunar_month > 12 {
        return None;
    }
    let year_stem = year_pair(lunar_year).stem.index() as usize;
    let m = lunar_month as i64;
    Some(SexagenaryPair {
        stem: HeavenlyStem::from_cycle(MONTH_STEM_START[year_stem % 5] + m - 1),
        branch: EarthlyBranch::from_cycle(m + 1),
    })
}

/// Can Chi of the civil day with Julian Day Number `jdn`.
pub const fn day_pair(jdn: i64) -> SexagenaryPair {
    SexagenaryPair {
        stem: HeavenlyStem::from_cycle(jdn + 9),
        branch: EarthlyBranch::from_cycle(jdn + 1),
    }
}

/// Can Chi of the double-hour containing local `hour` (0..24) on a day
/// whose stem is `day_stem`.
///
/// Hour 23 belongs to the Tý double-hour but keeps the given day's stem.
pub const fn hour_pair(day_stem: HeavenlyStem, hour: u32) -> Option<SexagenaryPair> {
    if hour > 23 {
        return None;
    }
    let branch = ((hour as i64 + 1) / 2) % 12;
    Some(SexagenaryPair {
        stem: HeavenlyStem::from_cycle(HOUR_STEM_START[day_stem.index() as usize % 5] + branch),
        branch: EarthlyBranch::from_cycle(branch),
    })
}

/// Zodiac animal of a lunar year.
pub const fn zodiac_animal(lunar_year: i32) -> ZodiacAnimal {
    year_pair(lunar_year).branch.animal()
}
