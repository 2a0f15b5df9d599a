//! New Moon instants from the lunation index.
//!
//! Meeus, *Astronomical Algorithms*, ch. 49: mean phase polynomial in the
//! lunation index `k`, 25 periodic corrections in the Sun's and Moon's
//! anomalies, the Moon's argument of latitude and node, plus 14 planetary
//! arguments. Accuracy is a few tens of seconds over several millennia.
//!
//! Lunation `k = 0` is the New Moon of 2000-01-06.

use amlich_time::{delta_t_days, local_day_number};

const D2R: f64 = std::f64::consts::PI / 180.0;

/// JDE of the mean New Moon of lunation 0.
pub const LUNATION_EPOCH_JDE: f64 = 2_451_550.097_66;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1_236.85;

/// New Moon periodic terms.
///
/// Each row: `[amplitude (days), E power, nM, nM', nF, nΩ]`.
#[rustfmt::skip]
static PERIODIC_TERMS: [[f64; 6]; 25] = [
    //  amplitude   E   nM  nM'  nF  nΩ
    [-0.407_20,  0.0,  0.0, 1.0,  0.0, 0.0],
    [ 0.172_41,  1.0,  1.0, 0.0,  0.0, 0.0],
    [ 0.016_08,  0.0,  0.0, 2.0,  0.0, 0.0],
    [ 0.010_39,  0.0,  0.0, 0.0,  2.0, 0.0],
    [ 0.007_39,  1.0, -1.0, 1.0,  0.0, 0.0],
    [-0.005_14,  1.0,  1.0, 1.0,  0.0, 0.0],
    [ 0.002_08,  2.0,  2.0, 0.0,  0.0, 0.0],
    [-0.001_11,  0.0,  0.0, 1.0, -2.0, 0.0],
    [-0.000_57,  0.0,  0.0, 1.0,  2.0, 0.0],
    [ 0.000_56,  1.0,  1.0, 2.0,  0.0, 0.0],
    [-0.000_42,  0.0,  0.0, 3.0,  0.0, 0.0],
    [ 0.000_42,  1.0,  1.0, 0.0,  2.0, 0.0],
    [ 0.000_38,  1.0,  1.0, 0.0, -2.0, 0.0],
    [-0.000_24,  1.0, -1.0, 2.0,  0.0, 0.0],
    [-0.000_17,  0.0,  0.0, 0.0,  0.0, 1.0],
    [-0.000_07,  0.0,  2.0, 1.0,  0.0, 0.0],
    [ 0.000_04,  0.0,  0.0, 2.0, -2.0, 0.0],
    [ 0.000_04,  0.0,  3.0, 0.0,  0.0, 0.0],
    [ 0.000_03,  0.0,  1.0, 1.0, -2.0, 0.0],
    [ 0.000_03,  0.0,  0.0, 2.0,  2.0, 0.0],
    [-0.000_03,  0.0,  1.0, 1.0,  2.0, 0.0],
    [ 0.000_03,  0.0, -1.0, 1.0,  2.0, 0.0],
    [-0.000_02,  0.0, -1.0, 1.0, -2.0, 0.0],
    [-0.000_02,  0.0,  1.0, 3.0,  0.0, 0.0],
    [ 0.000_02,  0.0,  0.0, 4.0,  0.0, 0.0],
];

/// Planetary arguments A1..A14.
///
/// Each row: `[a0 (deg), a1 (deg per lunation), a2 (deg / T²), amplitude (μd)]`.
#[rustfmt::skip]
static PLANETARY_TERMS: [[f64; 4]; 14] = [
    [299.77,  0.107_408, -0.009_173, 325.0],
    [251.88,  0.016_321,  0.0,       165.0],
    [251.83, 26.651_886,  0.0,       164.0],
    [349.42, 36.412_478,  0.0,       126.0],
    [ 84.66, 18.206_239,  0.0,       110.0],
    [141.74, 53.303_771,  0.0,        62.0],
    [207.14,  2.453_732,  0.0,        60.0],
    [154.84,  7.306_860,  0.0,        56.0],
    [ 34.52, 27.261_239,  0.0,        47.0],
    [207.19,  0.121_824,  0.0,        42.0],
    [291.34,  1.844_379,  0.0,        40.0],
    [161.72, 24.198_154,  0.0,        37.0],
    [239.56, 25.513_099,  0.0,        35.0],
    [331.55,  3.592_518,  0.0,        23.0],
];

/// JDE (TT) of the New Moon of lunation `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = LUNATION_EPOCH_JDE + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    // eccentricity of Earth's orbit
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    // Sun's mean anomaly
    let m = (2.553_4 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3) * D2R;
    // Moon's mean anomaly
    let mp = (201.564_3 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        * D2R;
    // Moon's argument of latitude
    let f = (160.710_8 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        * D2R;
    // longitude of the ascending node
    let om = (124.774_6 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3) * D2R;

    let periodic: f64 = PERIODIC_TERMS
        .iter()
        .map(|row| {
            let arg = row[2] * m + row[3] * mp + row[4] * f + row[5] * om;
            row[0] * e.powi(row[1] as i32) * arg.sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .map(|row| row[3] * 1e-6 * ((row[0] + row[1] * k + row[2] * t2) * D2R).sin())
        .sum();

    mean + periodic + planetary
}

/// UT Julian Date of the New Moon of lunation `k`.
pub fn new_moon_time(k: i64) -> f64 {
    let jde = new_moon_jde(k);
    jde - delta_t_days(jde)
}

/// Lunation index whose mean New Moon is at or just before `jd`.
///
/// The true New Moon may differ by up to ~14 hours; callers adjust by one.
pub fn lunation_index_near(jd: f64) -> i64 {
    ((jd - LUNATION_EPOCH_JDE) / SYNODIC_MONTH_DAYS).floor() as i64
}

/// Local day number containing the New Moon of lunation `k`.
pub fn new_moon_day(k: i64, tz_hours: f64) -> i64 {
    local_day_number(new_moon_time(k), tz_hours)
}
