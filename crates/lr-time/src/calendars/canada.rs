//! Canada (federal and Ontario statutory) holiday calendar.

use crate::calendar::HolidayCalendar;
use crate::holiday::{holiday_from_rule, Holiday, HolidayRule};
use crate::month_day::MonthDay;
use crate::weekday::Weekday;

/// Canada holiday calendar.
///
/// The following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Family Day (3rd Monday of February, since 2008)
/// * Good Friday (Easter − 2)
/// * Easter Monday (Easter + 1)
/// * Victoria Day (Monday on or before May 24)
/// * Canada Day (Jul 1)
/// * Civic Holiday (1st Monday of August)
/// * Labour Day (1st Monday of September)
/// * National Day for Truth and Reconciliation (Sep 30, since 2021)
/// * Thanksgiving (2nd Monday of October)
/// * Remembrance Day (Nov 11)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
///
/// Holidays falling on a weekend are not shifted to a substitute day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canada;

const fn fixed(month: u8, day: u8) -> HolidayRule {
    HolidayRule::Fixed(MonthDay::new_const(month, day))
}

const fn monday(n: u8, month: u8) -> HolidayRule {
    HolidayRule::NthWeekday {
        n,
        weekday: Weekday::Monday,
        month,
    }
}

const RULES: &[(&str, HolidayRule, Option<u16>)] = &[
    ("New Year's Day", fixed(1, 1), None),
    ("Family Day", monday(3, 2), Some(2008)),
    ("Good Friday", HolidayRule::EasterOffset(-2), None),
    ("Easter Monday", HolidayRule::EasterOffset(1), None),
    (
        "Victoria Day",
        HolidayRule::MondayOnOrBefore(MonthDay::new_const(5, 24)),
        None,
    ),
    ("Canada Day", fixed(7, 1), None),
    ("Civic Holiday", monday(1, 8), None),
    ("Labour Day", monday(1, 9), None),
    (
        "National Day for Truth and Reconciliation",
        fixed(9, 30),
        Some(2021),
    ),
    ("Thanksgiving", monday(2, 10), None),
    ("Remembrance Day", fixed(11, 11), None),
    ("Christmas Day", fixed(12, 25), None),
    ("Boxing Day", fixed(12, 26), None),
];

impl HolidayCalendar for Canada {
    fn name(&self) -> &str {
        "Canada"
    }

    fn holidays_in_year(&self, year: u16) -> Vec<Holiday> {
        let mut holidays: Vec<Holiday> = RULES
            .iter()
            .filter_map(|(name, rule, since)| holiday_from_rule(name, rule, *since, year))
            .collect();
        holidays.sort_by_key(|h| h.date);
        holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_day() {
        assert!(Canada.is_holiday(date(2023, 1, 1)));
    }

    #[test]
    fn family_day_2023() {
        // 3rd Monday of February 2023 = Feb 20
        assert_eq!(Canada.holiday_name(date(2023, 2, 20)).as_deref(), Some("Family Day"));
        // Not observed before 2008: 3rd Monday of February 2007 = Feb 19
        assert!(!Canada.is_holiday(date(2007, 2, 19)));
    }

    #[test]
    fn good_friday_2023() {
        assert_eq!(Canada.holiday_name(date(2023, 4, 7)).as_deref(), Some("Good Friday"));
    }

    #[test]
    fn victoria_day_2023() {
        // Monday on or before May 24, 2023: May 22
        assert_eq!(Canada.holiday_name(date(2023, 5, 22)).as_deref(), Some("Victoria Day"));
    }

    #[test]
    fn labour_day_and_thanksgiving_2024() {
        assert_eq!(Canada.holiday_name(date(2024, 9, 2)).as_deref(), Some("Labour Day"));
        assert_eq!(Canada.holiday_name(date(2024, 10, 14)).as_deref(), Some("Thanksgiving"));
    }

    #[test]
    fn weekend_holidays_are_not_shifted() {
        // Canada Day 2023 is a Saturday; Monday Jul 3 is an ordinary day.
        assert!(Canada.is_holiday(date(2023, 7, 1)));
        assert!(!Canada.is_holiday(date(2023, 7, 3)));
    }

    #[test]
    fn year_is_sorted_and_complete() {
        let list = Canada.holidays_in_year(2024);
        assert_eq!(list.len(), 13);
        assert!(list.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(Canada.holidays_in_year(2020).len(), 12);
    }

    #[test]
    fn normal_day() {
        // 2023-03-15 is a Wednesday
        assert!(!Canada.is_holiday(date(2023, 3, 15)));
    }
}
