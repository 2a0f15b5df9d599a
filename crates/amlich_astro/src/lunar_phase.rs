//! Moon age and the eight traditional phases.

use crate::new_moon::{SYNODIC_MONTH_DAYS, lunation_index_near, new_moon_time};

/// Phase of the Moon by age within the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// Sóc
    NewMoon,
    /// Thiếu sáng
    WaxingCrescent,
    /// Thượng huyền
    FirstQuarter,
    /// Gần rằm
    WaxingGibbous,
    /// Rằm
    FullMoon,
    /// Tàn rằm
    WaningGibbous,
    /// Hạ huyền
    LastQuarter,
    /// Thiếu tối
    WaningCrescent,
}

/// All phases in order of increasing age.
pub const ALL_MOON_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "Sóc",
            Self::WaxingCrescent => "Thiếu sáng",
            Self::FirstQuarter => "Thượng huyền",
            Self::WaxingGibbous => "Gần rằm",
            Self::FullMoon => "Rằm",
            Self::WaningGibbous => "Tàn rằm",
            Self::LastQuarter => "Hạ huyền",
            Self::WaningCrescent => "Thiếu tối",
        }
    }

    /// Phase for a fraction of the synodic month in [0, 1).
    ///
    /// The four principal phases get a narrow window (±0.03) around their
    /// exact fraction.
    pub fn from_fraction(fraction: f64) -> Self {
        match fraction {
            f if !(0.03..=0.97).contains(&f) => Self::NewMoon,
            f if f < 0.22 => Self::WaxingCrescent,
            f if f < 0.28 => Self::FirstQuarter,
            f if f < 0.47 => Self::WaxingGibbous,
            f if f < 0.53 => Self::FullMoon,
            f if f < 0.72 => Self::WaningGibbous,
            f if f < 0.78 => Self::LastQuarter,
            _ => Self::WaningCrescent,
        }
    }
}

/// Days since the most recent New Moon at UT Julian Date `jd`.
pub fn moon_age_days(jd: f64) -> f64 {
    let mut k = lunation_index_near(jd);
    while new_moon_time(k) > jd {
        k -= 1;
    }
    while new_moon_time(k + 1) <= jd {
        k += 1;
    }
    jd - new_moon_time(k)
}

/// Moon phase at UT Julian Date `jd`.
pub fn moon_phase(jd: f64) -> MoonPhase {
    MoonPhase::from_fraction(moon_age_days(jd) / SYNODIC_MONTH_DAYS)
}
