//! End-to-end tests through the `Calendar` facade.

use std::sync::Arc;

use proptest::prelude::*;

use amlich_rs::{
    AmlichError, Calendar, CalendarConfig, CalendarError, CivilDate, Constellation, Element,
    ElementRelation, LunarDate, MoonPhase, NaAm, SolarTerm, ZodiacAnimal, element_compatibility,
    zodiac_animal,
};

fn calendar() -> Calendar {
    Calendar::new(CalendarConfig::default()).unwrap()
}

#[test]
fn tet_2024_full_day_info() {
    let info = calendar().day_info(&CivilDate::at_noon(2024, 2, 10)).unwrap();
    assert_eq!(info.lunar.date, LunarDate::new(2024, 1, 1, false));
    assert_eq!(info.lunar.month_length, 29);
    assert_eq!(info.sexagenary.year.to_string(), "Giáp Thìn");
    assert_eq!(info.sexagenary.month.to_string(), "Bính Dần");
    assert_eq!(info.sexagenary.day.to_string(), "Giáp Thìn");
    assert_eq!(info.sexagenary.hour.to_string(), "Canh Ngọ");
    assert_eq!(info.sexagenary.year_na_am, NaAm::PhuDangHoa);
    assert_eq!(info.sexagenary.zodiac, ZodiacAnimal::Dragon);
    assert_eq!(info.solar_term, SolarTerm::LapXuan);
    assert_eq!(info.constellation, Constellation::Willow);
    assert_eq!(info.moon_phase, MoonPhase::NewMoon);
}

#[test]
fn convert_by_components() {
    let info = calendar().convert(2025, 7, 25, 9, 30, 0.0).unwrap();
    assert_eq!(info.date, LunarDate::new(2025, 6, 1, true));
    assert_eq!(info.date.to_string(), "1/6L/2025");
}

#[test]
fn leap_month_shares_month_pair() {
    let cal = calendar();
    let regular = cal.sexagenary(&CivilDate::at_noon(2025, 6, 25)).unwrap();
    let leap = cal.sexagenary(&CivilDate::at_noon(2025, 7, 25)).unwrap();
    assert_eq!(regular.month, leap.month);
    assert_ne!(regular.day, leap.day);
}

#[test]
fn to_solar_inverts_convert() {
    let cal = calendar();
    for &(y, m, d) in &[(2023, 3, 22), (2020, 5, 23), (2000, 1, 1), (2024, 2, 9)] {
        let lunar = cal.convert(y, m, d, 12, 0, 0.0).unwrap().date;
        let civil = cal.to_solar(&lunar).unwrap();
        assert_eq!((civil.year, civil.month, civil.day), (y, m, d), "{lunar}");
    }
}

#[test]
fn missing_leap_month_rejected() {
    let err = calendar().to_solar(&LunarDate::new(2024, 6, 1, true)).unwrap_err();
    assert!(matches!(
        err,
        AmlichError::Calendar(CalendarError::InvalidLunarDate { .. })
    ));
}

#[test]
fn invalid_civil_date_rejected() {
    let err = calendar().convert(2023, 2, 29, 12, 0, 0.0).unwrap_err();
    assert!(matches!(err, AmlichError::Calendar(CalendarError::Time(_))));
    assert!(calendar().constellation(2023, 2, 29).is_err());
}

#[test]
fn strict_config_rejects_out_of_range_years() {
    let cal = Calendar::new(CalendarConfig {
        strict: true,
        ..CalendarConfig::default()
    })
    .unwrap();
    let err = cal.convert(1850, 6, 1, 12, 0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        AmlichError::Calendar(CalendarError::LowConfidence { year: 1850, .. })
    ));

    let lenient = calendar().convert(1850, 6, 1, 12, 0, 0.0).unwrap();
    assert!(lenient.low_confidence);
}

#[test]
fn far_years_are_typed_errors() {
    let cal = calendar();
    for year in [50_000, -20_000] {
        let err = cal.day_info(&CivilDate::at_noon(year, 3, 1)).unwrap_err();
        assert!(matches!(
            err,
            AmlichError::Calendar(CalendarError::UnsupportedYear { year: y, .. }) if y == year
        ));
    }
    let err = cal.to_solar(&LunarDate::new(50_000, 1, 1, false)).unwrap_err();
    assert!(matches!(
        err,
        AmlichError::Calendar(CalendarError::UnsupportedYear { .. })
    ));
}

#[test]
fn scan_across_tet_in_order() {
    let results = calendar().scan(&CivilDate::at_noon(2024, 2, 8), 5);
    let dates: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().lunar.date.to_string())
        .collect();
    assert_eq!(
        dates,
        ["29/12/2023", "30/12/2023", "1/1/2024", "2/1/2024", "3/1/2024"]
    );
}

#[test]
fn scan_day_pairs_advance_by_one() {
    let results = calendar().scan(&CivilDate::at_noon(2025, 1, 1), 90);
    let positions: Vec<u8> = results
        .iter()
        .map(|r| r.as_ref().unwrap().sexagenary.day.cycle_index())
        .collect();
    assert!(positions.windows(2).all(|w| (w[0] + 1) % 60 == w[1]));
}

#[test]
fn shared_across_threads() {
    let cal = Arc::new(calendar());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let cal = Arc::clone(&cal);
            std::thread::spawn(move || cal.convert(2020 + i, 3, 1, 12, 0, 0.0).unwrap().date)
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap().year, 2020 + i as i32);
    }
}

#[test]
fn config_from_toml_drives_timezone() {
    let config = CalendarConfig::from_toml_str("timezone_offset_hours = 8.0").unwrap();
    let cal = Calendar::new(config).unwrap();
    assert_eq!(cal.config().timezone_offset_hours, 8.0);
    // 1985 Tết fell on different days in UTC+7 and UTC+8.
    let hanoi = calendar().convert(1985, 1, 21, 12, 0, 0.0).unwrap().date;
    let beijing = cal.convert(1985, 1, 21, 12, 0, 0.0).unwrap().date;
    assert_ne!(hanoi, beijing);
}

#[test]
fn free_functions() {
    assert_eq!(zodiac_animal(2024), ZodiacAnimal::Dragon);
    assert_eq!(
        element_compatibility(Element::Water, Element::Wood),
        ElementRelation::Generates
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cache_never_changes_answers(y in 1900i32..=2100, m in 1u32..=12, d in 1u32..=28) {
        let uncached = Calendar::new(CalendarConfig {
            cache_capacity: 0,
            ..CalendarConfig::default()
        })
        .unwrap();
        let civil = CivilDate::at_noon(y, m, d);
        prop_assert_eq!(
            calendar().day_info(&civil).unwrap(),
            uncached.day_info(&civil).unwrap()
        );
    }
}
