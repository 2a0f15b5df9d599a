//! Day-number golden values and inverse properties.

use amlich_time::{
    CivilDate, GREGORIAN_START_DAY, TimeError, civil_from_day_number, day_number, validate_tz,
};
use proptest::prelude::*;

#[test]
fn known_day_numbers() {
    let cases = [
        ((2000, 1, 1), 2_451_545),
        ((2024, 2, 10), 2_460_351),
        ((1582, 10, 15), GREGORIAN_START_DAY),
        ((1582, 10, 4), 2_299_160),
        ((1858, 11, 17), 2_400_001),
    ];
    for ((y, m, d), expected) in cases {
        assert_eq!(
            day_number(y, m, d).unwrap(),
            expected,
            "{y:04}-{m:02}-{d:02}"
        );
    }
}

#[test]
fn consecutive_days_differ_by_one() {
    let a = day_number(2023, 12, 31).unwrap();
    let b = day_number(2024, 1, 1).unwrap();
    assert_eq!(b - a, 1);
}

#[test]
fn civil_date_reports_reason() {
    let err = CivilDate::at_noon(2023, 2, 30).day_number().unwrap_err();
    let TimeError::InvalidDate { reason, .. } = err else {
        panic!("unexpected error {err:?}");
    };
    assert_eq!(reason, "day is outside the month");
}

#[test]
fn timezone_bounds() {
    assert!(validate_tz(7.0).is_ok());
    assert!(validate_tz(-14.0).is_ok());
    assert!(validate_tz(14.5).is_err());
    assert!(validate_tz(f64::NAN).is_err());
}

proptest! {
    #[test]
    fn day_number_inverts(jdn in 1_721_426i64..2_816_788) {
        let (y, m, d) = civil_from_day_number(jdn);
        prop_assert_eq!(day_number(y, m, d).unwrap(), jdn);
    }
}
