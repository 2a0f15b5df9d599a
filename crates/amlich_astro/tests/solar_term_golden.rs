//! Golden tests for solstices and solar terms.
//!
//! Reference instants from published tables (USNO / HKO), expressed as
//! local dates in UTC+7.

use amlich_astro::{
    SolarTerm, principal_term_sector, solar_longitude, solar_term_crossing, winter_solstice,
};
use amlich_time::{civil_from_day_number, local_day_number};

const TZ: f64 = 7.0;

fn local_date(jd: f64) -> (i32, u32, u32) {
    civil_from_day_number(local_day_number(jd, TZ))
}

#[test]
fn winter_solstices() {
    // 2022-12-21 21:48 UT, 2023-12-22 03:27 UT, 2024-12-21 09:21 UT
    let cases = [
        (2022, 2_459_935.408, (2022, 12, 22)),
        (2023, 2_460_300.644, (2023, 12, 22)),
        (2024, 2_460_665.890, (2024, 12, 21)),
    ];
    for (year, jd, date) in cases {
        let ws = winter_solstice(year);
        assert!(!ws.approximate, "{year}: refinement did not converge");
        assert!(
            (ws.jd - jd).abs() < 0.02,
            "{year}: got JD {}, expected {jd}",
            ws.jd
        );
        assert_eq!(local_date(ws.jd), date, "{year}");
        assert_eq!(ws.term, SolarTerm::DongChi);
    }
}

#[test]
fn solstice_within_a_day_of_reference() {
    // 2022-12-21 21:48 UT
    let ws = winter_solstice(2022);
    assert!((ws.jd - 2_459_935.408).abs() < 1.0);
}

#[test]
fn term_18_is_the_winter_solstice() {
    for year in [1900, 1999, 2022, 2100] {
        let ws = winter_solstice(year);
        let term = solar_term_crossing(year, 18).unwrap();
        assert!(
            (ws.jd - term.jd).abs() < 1e-5,
            "{year}: {} vs {}",
            ws.jd,
            term.jd
        );
    }
}

#[test]
fn terms_2024_local_dates() {
    let cases = [
        (0, (2024, 3, 20)),
        (6, (2024, 6, 21)),
        (12, (2024, 9, 22)),
        (19, (2024, 1, 6)),
        (21, (2024, 2, 4)),
    ];
    for (index, date) in cases {
        let ev = solar_term_crossing(2024, index).unwrap();
        assert!(!ev.approximate);
        assert_eq!(local_date(ev.jd), date, "term {index}");
    }
}

#[test]
fn crossings_hit_target_longitude() {
    for index in 0..24u8 {
        let ev = solar_term_crossing(2030, index).unwrap();
        let target = index as f64 * 15.0;
        let mut diff = solar_longitude(ev.jd) - target;
        if diff > 180.0 {
            diff -= 360.0;
        }
        assert!(diff.abs() < 1e-5, "term {index}: residual {diff}");
    }
}

#[test]
fn crossings_ordered_within_year() {
    // Terms 19..=23 then 0..=18 run January to December.
    let order: Vec<u8> = (19..24).chain(0..19).collect();
    let jds: Vec<f64> = order
        .iter()
        .map(|&i| solar_term_crossing(2025, i).unwrap().jd)
        .collect();
    for pair in jds.windows(2) {
        assert!(pair[1] > pair[0]);
        assert!((pair[1] - pair[0] - 15.2).abs() < 1.0);
    }
}

#[test]
fn historic_and_far_future_years_converge() {
    for year in [500, 1200, 1582, 2500] {
        assert!(!winter_solstice(year).approximate, "{year}");
    }
}

#[test]
fn principal_sector_changes_at_principal_term() {
    let ev = solar_term_crossing(2024, 6).unwrap();
    assert_eq!(principal_term_sector(ev.jd - 0.01), 2);
    assert_eq!(principal_term_sector(ev.jd + 0.01), 3);
}
