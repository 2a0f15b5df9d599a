//! ΔT = TT − UT.
//!
//! The New Moon and solstice series are expressed in Terrestrial Time; civil
//! dates are in UT. ΔT bridges the two. Piecewise polynomials of Espenak &
//! Meeus (NASA Five Millennium Canon), valid −1999..+3000 with the long-term
//! parabola outside that range.

use crate::julian::J2000_JD;

/// Days per Julian year.
const DAYS_PER_YEAR: f64 = 365.25;

/// Decimal year of a Julian Date (good to a day, ample for ΔT).
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_YEAR
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(y: f64) -> f64 {
    match y {
        y if y < -500.0 => long_term(y),
        y if y < 500.0 => {
            let u = y / 100.0;
            10583.6 - 1014.41 * u + 33.78311 * u.powi(2) - 5.952053 * u.powi(3)
                - 0.1798452 * u.powi(4)
                + 0.022174192 * u.powi(5)
                + 0.0090316521 * u.powi(6)
        }
        y if y < 1600.0 => {
            let u = (y - 1000.0) / 100.0;
            1574.2 - 556.01 * u + 71.23472 * u.powi(2) + 0.319781 * u.powi(3)
                - 0.8503463 * u.powi(4)
                - 0.005050998 * u.powi(5)
                + 0.0083572073 * u.powi(6)
        }
        y if y < 1700.0 => {
            let t = y - 1600.0;
            120.0 - 0.9808 * t - 0.01532 * t.powi(2) + t.powi(3) / 7129.0
        }
        y if y < 1800.0 => {
            let t = y - 1700.0;
            8.83 + 0.1603 * t - 0.0059285 * t.powi(2) + 0.00013336 * t.powi(3)
                - t.powi(4) / 1_174_000.0
        }
        y if y < 1860.0 => {
            let t = y - 1800.0;
            13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
                - 0.00037436 * t.powi(4)
                + 0.0000121272 * t.powi(5)
                - 0.0000001699 * t.powi(6)
                + 0.000000000875 * t.powi(7)
        }
        y if y < 1900.0 => {
            let t = y - 1860.0;
            7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
                - 0.0004473624 * t.powi(4)
                + t.powi(5) / 233_174.0
        }
        y if y < 1920.0 => {
            let t = y - 1900.0;
            -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
                - 0.000197 * t.powi(4)
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060374 * t.powi(2)
                + 0.0017275 * t.powi(3)
                + 0.000651814 * t.powi(4)
                + 0.00002373599 * t.powi(5)
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t.powi(2)
        }
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// ΔT in days at a Julian Date.
pub fn delta_t_days(jd: f64) -> f64 {
    delta_t_seconds(decimal_year(jd)) / 86_400.0
}
