//! The 24 solar terms (tiết khí) and the winter solstice.
//!
//! Terms are 15° apart in apparent solar longitude, indexed from the March
//! equinox (Xuân phân, 0°). Terms at multiples of 30° are Principal Terms
//! (trung khí); they decide month numbering and leap months.
//!
//! Instants are found from Meeus' quartic estimates (ch. 27) and refined by
//! Newton iteration on the solar longitude.

use amlich_time::delta_t_days;

use crate::error::AstroError;
use crate::search_util::refine_solar_crossing;
use crate::solar::solar_longitude;

/// Mean tropical year in days.
const TROPICAL_YEAR_DAYS: f64 = 365.242_189;

/// One of the 24 solar terms, in longitude order from the March equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum SolarTerm {
    XuanPhan,
    ThanhMinh,
    CocVu,
    LapHa,
    TieuMan,
    MangChung,
    HaChi,
    TieuThu,
    DaiThu,
    LapThu,
    XuThu,
    BachLo,
    ThuPhan,
    HanLo,
    SuongGiang,
    LapDong,
    TieuTuyet,
    DaiTuyet,
    DongChi,
    TieuHan,
    DaiHan,
    LapXuan,
    VuThuy,
    KinhTrap,
}

/// All 24 terms in order (index 0 = Xuân phân at 0°).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::XuanPhan,
    SolarTerm::ThanhMinh,
    SolarTerm::CocVu,
    SolarTerm::LapHa,
    SolarTerm::TieuMan,
    SolarTerm::MangChung,
    SolarTerm::HaChi,
    SolarTerm::TieuThu,
    SolarTerm::DaiThu,
    SolarTerm::LapThu,
    SolarTerm::XuThu,
    SolarTerm::BachLo,
    SolarTerm::ThuPhan,
    SolarTerm::HanLo,
    SolarTerm::SuongGiang,
    SolarTerm::LapDong,
    SolarTerm::TieuTuyet,
    SolarTerm::DaiTuyet,
    SolarTerm::DongChi,
    SolarTerm::TieuHan,
    SolarTerm::DaiHan,
    SolarTerm::LapXuan,
    SolarTerm::VuThuy,
    SolarTerm::KinhTrap,
];

impl SolarTerm {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::XuanPhan => "Xuân phân",
            Self::ThanhMinh => "Thanh minh",
            Self::CocVu => "Cốc vũ",
            Self::LapHa => "Lập hạ",
            Self::TieuMan => "Tiểu mãn",
            Self::MangChung => "Mang chủng",
            Self::HaChi => "Hạ chí",
            Self::TieuThu => "Tiểu thử",
            Self::DaiThu => "Đại thử",
            Self::LapThu => "Lập thu",
            Self::XuThu => "Xử thử",
            Self::BachLo => "Bạch lộ",
            Self::ThuPhan => "Thu phân",
            Self::HanLo => "Hàn lộ",
            Self::SuongGiang => "Sương giáng",
            Self::LapDong => "Lập đông",
            Self::TieuTuyet => "Tiểu tuyết",
            Self::DaiTuyet => "Đại tuyết",
            Self::DongChi => "Đông chí",
            Self::TieuHan => "Tiểu hàn",
            Self::DaiHan => "Đại hàn",
            Self::LapXuan => "Lập xuân",
            Self::VuThuy => "Vũ thủy",
            Self::KinhTrap => "Kinh trập",
        }
    }

    /// 0-based index (0 = Xuân phân).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term from a 0-based index, `None` outside 0..24.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 24 {
            Some(ALL_SOLAR_TERMS[index as usize])
        } else {
            None
        }
    }

    /// Apparent solar longitude at which the term begins, in degrees.
    pub const fn longitude_deg(self) -> f64 {
        self.index() as f64 * 15.0
    }

    /// Whether this is a Principal Term (trung khí, multiple of 30°).
    pub const fn is_principal(self) -> bool {
        self.index() % 2 == 0
    }
}

/// A located solar-term instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// UT Julian Date of the crossing.
    pub jd: f64,
    /// True when refinement did not converge and `jd` is the polynomial
    /// estimate.
    pub approximate: bool,
}

/// Meeus' mean December solstice, JDE.
fn december_solstice_estimate(year: i32) -> f64 {
    if year < 1000 {
        let y = year as f64 / 1000.0;
        1_721_414.399_87 + 365_242.882_57 * y - 0.007_69 * y * y - 0.009_33 * y.powi(3)
            - 0.000_06 * y.powi(4)
    } else {
        let y = (year as f64 - 2000.0) / 1000.0;
        2_451_900.059_52 + 365_242.740_49 * y - 0.062_23 * y * y - 0.008_23 * y.powi(3)
            + 0.000_32 * y.powi(4)
    }
}

/// Meeus' mean March equinox, JDE.
fn march_equinox_estimate(year: i32) -> f64 {
    if year < 1000 {
        let y = year as f64 / 1000.0;
        1_721_139.291_89 + 365_242.137_40 * y + 0.061_34 * y * y + 0.001_11 * y.powi(3)
            - 0.000_71 * y.powi(4)
    } else {
        let y = (year as f64 - 2000.0) / 1000.0;
        2_451_623.809_84 + 365_242.374_04 * y + 0.051_69 * y * y - 0.004_11 * y.powi(3)
            - 0.000_57 * y.powi(4)
    }
}

fn locate(term: SolarTerm, estimate_jde: f64) -> SolarTermEvent {
    let estimate = estimate_jde - delta_t_days(estimate_jde);
    let refined = refine_solar_crossing(term.longitude_deg(), estimate);
    SolarTermEvent {
        term,
        jd: refined.jd,
        approximate: refined.approximate,
    }
}

/// The December (winter) solstice of civil `year`.
pub fn winter_solstice(year: i32) -> SolarTermEvent {
    locate(SolarTerm::DongChi, december_solstice_estimate(year))
}

/// The crossing of solar term `term_index` that falls in civil `year`.
///
/// Terms 19..=23 (Tiểu hàn to Kinh trập) fall in January to March, before
/// that year's equinox.
pub fn solar_term_crossing(year: i32, term_index: u8) -> Result<SolarTermEvent, AstroError> {
    let term = SolarTerm::from_index(term_index).ok_or(AstroError::InvalidTermIndex(term_index))?;
    let target = term.longitude_deg();
    let mut estimate = march_equinox_estimate(year) + target / 360.0 * TROPICAL_YEAR_DAYS;
    if target >= 285.0 {
        estimate -= TROPICAL_YEAR_DAYS;
    }
    Ok(locate(term, estimate))
}

/// The solar term segment the Sun is in at UT Julian Date `jd`.
pub fn solar_term_at(jd: f64) -> SolarTerm {
    let index = (solar_longitude(jd) / 15.0).floor() as usize;
    ALL_SOLAR_TERMS[index.min(23)]
}

/// Principal-term sector `floor(λ / 30)` in 0..12 at UT Julian Date `jd`.
///
/// Two instants in the same sector have no Principal Term between them
/// (provided they are less than a month apart).
pub fn principal_term_sector(jd: f64) -> u32 {
    ((solar_longitude(jd) / 30.0).floor() as u32).min(11)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_metadata() {
        assert_eq!(SolarTerm::DongChi.index(), 18);
        assert_eq!(SolarTerm::DongChi.longitude_deg(), 270.0);
        assert!(SolarTerm::DongChi.is_principal());
        assert!(!SolarTerm::LapXuan.is_principal());
        assert_eq!(SolarTerm::LapXuan.name(), "Lập xuân");
        assert_eq!(SolarTerm::from_index(24), None);
    }

    #[test]
    fn all_terms_indexed_in_order() {
        for (i, term) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(term.index() as usize, i);
        }
    }

    #[test]
    fn invalid_index_rejected() {
        assert_eq!(
            solar_term_crossing(2024, 24),
            Err(AstroError::InvalidTermIndex(24))
        );
    }

    #[test]
    fn solstice_2023() {
        let ws = winter_solstice(2023);
        assert!(!ws.approximate);
        assert!((ws.jd - 2_460_300.643).abs() < 0.01, "got {}", ws.jd);
    }

    #[test]
    fn term_at_solstice() {
        let ws = winter_solstice(2024);
        assert_eq!(solar_term_at(ws.jd + 0.01), SolarTerm::DongChi);
        assert_eq!(solar_term_at(ws.jd - 0.01), SolarTerm::DaiTuyet);
        assert_eq!(principal_term_sector(ws.jd + 0.01), 9);
    }
}
