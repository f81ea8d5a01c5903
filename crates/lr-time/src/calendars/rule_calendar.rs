//! Rule calendar: a calendar assembled from holiday rules and one-off
//! closure dates, typically loaded from configuration.

use std::path::Path;

use lr_core::config;
use lr_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::holiday::{Holiday, HolidayDefinition, HolidayRule};

/// A one-off non-meeting date (lab shutdown, retreat, building move).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Closure {
    /// Display name.
    pub name: String,
    /// The closed date.
    pub date: Date,
}

/// A calendar built from [`HolidayDefinition`]s plus dated closures.
///
/// ```toml
/// name = "Lab calendar"
///
/// [[holidays]]
/// name = "Founders Day"
/// rule = { fixed = "06-15" }
///
/// [[holidays]]
/// name = "Labour Day"
/// rule = { nth_weekday = { n = 1, weekday = "Monday", month = 9 } }
///
/// [[closures]]
/// name = "Lab move"
/// date = "2024-08-14"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleCalendar {
    name: String,
    #[serde(default)]
    holidays: Vec<HolidayDefinition>,
    #[serde(default)]
    closures: Vec<Closure>,
}

impl RuleCalendar {
    /// Create an empty calendar with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: Vec::new(),
            closures: Vec::new(),
        }
    }

    /// Parse a calendar from TOML and check its rules.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let cal: Self = config::from_toml_str(content)?;
        cal.validate()?;
        Ok(cal)
    }

    /// Read a calendar from a TOML file and check its rules.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let cal: Self = config::from_toml_file(path)?;
        cal.validate()?;
        Ok(cal)
    }

    /// Add a recurring holiday.
    pub fn add_rule(&mut self, name: impl Into<String>, rule: HolidayRule) -> Result<()> {
        rule.check()
            .map_err(|e| Error::InvalidArgument(format!("holiday rule: {e}")))?;
        self.holidays.push(HolidayDefinition::new(name, rule));
        Ok(())
    }

    /// Add a recurring holiday definition (which may carry a first year).
    pub fn add_definition(&mut self, definition: HolidayDefinition) -> Result<()> {
        definition
            .rule
            .check()
            .map_err(|e| Error::InvalidArgument(format!("holiday `{}`: {e}", definition.name)))?;
        self.holidays.push(definition);
        Ok(())
    }

    /// Add a one-off closure date.
    pub fn add_closure(&mut self, name: impl Into<String>, date: Date) {
        self.closures.push(Closure {
            name: name.into(),
            date,
        });
    }

    /// Remove every closure on `date`.  Returns `true` if any was removed.
    pub fn remove_closure(&mut self, date: Date) -> bool {
        let before = self.closures.len();
        self.closures.retain(|c| c.date != date);
        self.closures.len() != before
    }

    /// Number of recurring holiday definitions.
    pub fn rule_count(&self) -> usize {
        self.holidays.len()
    }

    /// Number of closure dates.
    pub fn closure_count(&self) -> usize {
        self.closures.len()
    }

    /// Check every rule's parameters.
    pub fn validate(&self) -> Result<()> {
        for def in &self.holidays {
            def.rule
                .check()
                .map_err(|e| Error::Config(format!("holiday `{}`: {e}", def.name)))?;
        }
        Ok(())
    }
}

impl HolidayCalendar for RuleCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays_in_year(&self, year: u16) -> Vec<Holiday> {
        let mut holidays: Vec<Holiday> = self
            .holidays
            .iter()
            .filter_map(|def| def.holiday_in(year))
            .chain(
                self.closures
                    .iter()
                    .filter(|c| c.date.year() == year)
                    .map(|c| Holiday::new(&c.name, c.date, false)),
            )
            .collect();
        holidays.sort_by_key(|h| h.date);
        holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month_day::MonthDay;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_calendar_has_no_holidays() {
        let cal = RuleCalendar::new("Test");
        assert_eq!(cal.name(), "Test");
        assert!(cal.holidays_in_year(2024).is_empty());
    }

    #[test]
    fn add_and_remove_closure() {
        let mut cal = RuleCalendar::new("Custom");
        let move_day = date(2024, 3, 15);
        assert!(!cal.is_holiday(move_day));

        cal.add_closure("Lab move", move_day);
        assert_eq!(cal.holiday_name(move_day).as_deref(), Some("Lab move"));
        assert_eq!(cal.closure_count(), 1);
        // Closures are single-year only
        assert!(!cal.is_holiday(date(2025, 3, 15)));

        assert!(cal.remove_closure(move_day));
        assert!(!cal.is_holiday(move_day));
        assert!(!cal.remove_closure(move_day));
    }

    #[test]
    fn rules_recur_every_year() {
        let mut cal = RuleCalendar::new("Rules");
        cal.add_rule("Founders Day", HolidayRule::Fixed(MonthDay::new(6, 15).unwrap()))
            .unwrap();
        assert!(cal.is_holiday(date(2024, 6, 15)));
        assert!(cal.is_holiday(date(2031, 6, 15)));
    }

    #[test]
    fn add_rule_rejects_invalid_occurrence() {
        let mut cal = RuleCalendar::new("Bad");
        let err = cal
            .add_rule(
                "Sixth Monday",
                HolidayRule::NthWeekday {
                    n: 6,
                    weekday: Weekday::Monday,
                    month: 1,
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(cal.rule_count(), 0);
    }

    #[test]
    fn loads_from_toml() {
        let cal = RuleCalendar::from_toml_str(
            r#"
            name = "Lab calendar"

            [[holidays]]
            name = "Founders Day"
            rule = { fixed = "06-15" }

            [[holidays]]
            name = "Labour Day"
            rule = { nth_weekday = { n = 1, weekday = "Monday", month = 9 } }

            [[holidays]]
            name = "Good Friday"
            rule = { easter_offset = -2 }

            [[holidays]]
            name = "Victoria Day"
            rule = { monday_on_or_before = "05-24" }
            since = 1952

            [[closures]]
            name = "Lab move"
            date = "2024-08-14"
            "#,
        )
        .unwrap();
        assert_eq!(cal.name(), "Lab calendar");
        assert_eq!(cal.rule_count(), 4);
        let names: Vec<String> = cal
            .holidays_in_year(2024)
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(
            names,
            ["Good Friday", "Victoria Day", "Founders Day", "Lab move", "Labour Day"]
        );
    }

    #[test]
    fn listed_holidays_are_always_queryable() {
        // Built directly so the year-spilling rules bypass `validate`.
        let cal = RuleCalendar {
            name: "Edge".into(),
            holidays: vec![
                HolidayDefinition::new(
                    "New Year observed",
                    HolidayRule::MondayOnOrBefore(MonthDay::new(1, 1).unwrap()),
                ),
                HolidayDefinition::new("Lent closure", HolidayRule::EasterOffset(-100)),
            ],
            closures: Vec::new(),
        };
        let in_2025: Vec<(String, Date)> = cal
            .holidays_in_year(2025)
            .into_iter()
            .map(|h| (h.name, h.date))
            .collect();
        assert_eq!(in_2025, [("Lent closure".to_string(), date(2025, 1, 10))]);
        assert!(!cal.is_holiday(date(2024, 12, 30)));

        for year in 2020..=2030 {
            for h in cal.holidays_in_year(year) {
                assert_eq!(h.year, year);
                assert_eq!(h.date.year(), year);
                assert!(cal.is_holiday(h.date), "{} on {}", h.name, h.date);
                let start = date(year, 1, 1);
                let end = date(year, 12, 31);
                assert!(cal.holidays_in_range(start, end).contains(&h));
            }
        }
    }

    #[test]
    fn toml_with_year_spilling_rule_is_config_error() {
        let err = RuleCalendar::from_toml_str(
            r#"
            name = "Spill"
            [[holidays]]
            name = "Lent closure"
            rule = { easter_offset = -100 }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let mut cal = RuleCalendar::new("Spill");
        let rule = HolidayRule::MondayOnOrBefore(MonthDay::new(1, 1).unwrap());
        assert!(cal.add_rule("New Year observed", rule).is_err());
    }

    #[test]
    fn toml_with_bad_rule_is_config_error() {
        let err = RuleCalendar::from_toml_str(
            r#"
            name = "Broken"
            [[holidays]]
            name = "Zeroth Monday"
            rule = { nth_weekday = { n = 0, weekday = "Monday", month = 9 } }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
