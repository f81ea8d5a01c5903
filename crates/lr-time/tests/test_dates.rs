//! Integration tests for `Date`, `Weekday`, and week arithmetic.

use lr_time::date::{days_in_month, is_leap_year};
use lr_time::{weeks_between, Date, MonthDay, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn ymd_roundtrip() {
    let dates = [
        (1900, 1, 1),
        (1900, 12, 31),
        (2000, 2, 29), // leap
        (2100, 2, 28), // non-leap century
        (2024, 12, 31),
        (2199, 12, 31),
    ];
    for (y, m, d) in dates {
        let dt = date(y, m, d);
        assert_eq!(dt.ymd(), (y, m, d), "roundtrip {y}-{m:02}-{d:02}");
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn consecutive_serials_are_consecutive_days() {
    let mut prev = date(1900, 1, 1);
    let end = date(1905, 1, 1);
    while prev < end {
        let next = prev.add_days(1).unwrap();
        let (py, pm, pd) = prev.ymd();
        let (ny, nm, nd) = next.ymd();
        let same_month = ny == py && nm == pm && nd == pd + 1;
        let next_month = ny == py && nm == pm + 1 && nd == 1 && pd == days_in_month(py, pm);
        let next_year = ny == py + 1 && nm == 1 && nd == 1 && pm == 12 && pd == 31;
        assert!(same_month || next_month || next_year, "{prev} -> {next}");
        assert_eq!(
            next.weekday().ordinal() % 7,
            (prev.weekday().ordinal() + 1) % 7,
            "weekday sequence broken at {prev}"
        );
        prev = next;
    }
}

#[test]
fn parse_and_serialize() {
    let d: Date = "2024-01-01".parse().unwrap();
    assert_eq!(d, date(2024, 1, 1));
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-01-01\"");
    let back: Date = serde_json::from_str("\"2024-03-01\"").unwrap();
    assert_eq!(back, date(2024, 3, 1));
    assert!(serde_json::from_str::<Date>("\"2024-13-01\"").is_err());

    let md: MonthDay = serde_json::from_str("\"12-25\"").unwrap();
    assert_eq!(md.in_year(2024), Some(date(2024, 12, 25)));
}

#[test]
fn nth_weekday_reference_dates() {
    // Labour Day (1st Monday of September) and Thanksgiving (2nd Monday of October)
    assert_eq!(Date::nth_weekday(1, Weekday::Monday, 2024, 9).unwrap(), date(2024, 9, 2));
    assert_eq!(Date::nth_weekday(2, Weekday::Monday, 2024, 10).unwrap(), date(2024, 10, 14));
}

proptest! {
    #[test]
    fn weeks_between_symmetric_and_floor(a in 1i32..100_000, b in 1i32..100_000) {
        let da = Date::from_serial(a).unwrap();
        let db = Date::from_serial(b).unwrap();
        let w = weeks_between(da, db);
        prop_assert_eq!(w, weeks_between(db, da));
        prop_assert_eq!(w as i32, (a - b).abs() / 7);
    }

    #[test]
    fn nth_weekday_has_requested_weekday(
        year in 1900u16..=2199,
        month in 1u8..=12,
        n in 1u8..=4,
        wd in 1u8..=7,
    ) {
        let weekday = Weekday::from_ordinal(wd).unwrap();
        let d = Date::nth_weekday(n, weekday, year, month).unwrap();
        prop_assert_eq!(d.weekday(), weekday);
        prop_assert_eq!(d.month(), month);
        prop_assert_eq!((d.day_of_month() - 1) / 7 + 1, n);
    }

    #[test]
    fn iso_text_roundtrip(serial in 1i32..=109_573) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(Date::parse_iso(&d.to_string()).unwrap(), d);
    }
}
