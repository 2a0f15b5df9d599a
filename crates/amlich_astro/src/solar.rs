//! Apparent geocentric longitude of the Sun.
//!
//! Meeus, *Astronomical Algorithms*, ch. 25 (low accuracy, ~0.01°):
//! geometric mean longitude, mean anomaly, three-term equation of centre,
//! then nutation and aberration for the apparent longitude.

use amlich_time::{centuries_since_j2000, delta_t_days};

use crate::nutation::nutation_longitude_arcsec;

const D2R: f64 = std::f64::consts::PI / 180.0;

/// Annual aberration in degrees (−20.4898″).
const ABERRATION_DEG: f64 = 0.005_69;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Apparent solar longitude in degrees, [0, 360), at UT Julian Date `jd`.
///
/// # Panics
/// If `jd` is not finite.
pub fn solar_longitude(jd: f64) -> f64 {
    assert!(jd.is_finite(), "solar_longitude: non-finite Julian Date {jd}");
    let t = centuries_since_j2000(jd + delta_t_days(jd));
    let t2 = t * t;

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2) * D2R;
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    normalize_360(true_lon + nutation_longitude_arcsec(t) / 3600.0 - ABERRATION_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert_eq!(normalize_360(360.0), 0.0);
        assert!(normalize_360(-1e-18) < 360.0);
    }

    #[test]
    fn j2000_longitude() {
        let lon = solar_longitude(2_451_545.0);
        assert!((lon - 280.373).abs() < 0.01, "got {lon}");
    }

    #[test]
    fn longitude_increases_about_one_degree_per_day() {
        let a = solar_longitude(2_460_000.5);
        let b = solar_longitude(2_460_001.5);
        let step = normalize_360(b - a);
        assert!((0.95..1.03).contains(&step), "step {step}");
    }

    #[test]
    fn output_in_range() {
        for i in 0..400 {
            let lon = solar_longitude(2_451_545.0 + i as f64 * 0.97);
            assert!((0.0..360.0).contains(&lon));
        }
    }

    #[test]
    #[should_panic(expected = "non-finite")]
    fn nan_panics() {
        solar_longitude(f64::NAN);
    }
}
