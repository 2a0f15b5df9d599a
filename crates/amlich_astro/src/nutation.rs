//! Low-precision nutation in longitude.
//!
//! Four dominant terms of the IAU 1980 series (Meeus ch. 22), good to about
//! 0.5″. Calendar work needs the Sun's longitude to a few arcseconds at most.

/// Degrees to radians.
const D2R: f64 = std::f64::consts::PI / 180.0;

/// Nutation in longitude Δψ in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    // Ω: longitude of the Moon's ascending node
    let om = (125.044_52 - 1_934.136_261 * t) * D2R;
    // mean longitudes of the Sun and the Moon
    let l_sun = (280.466_5 + 36_000.769_8 * t) * D2R;
    let l_moon = (218.316_5 + 481_267.881_3 * t) * D2R;

    -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin()
}
