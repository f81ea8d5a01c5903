//! Holidays and the rules that place them in a given year.
//!
//! A [`HolidayRule`] is one of four shapes:
//!
//! * a fixed month/day (`12-25`),
//! * the *n*-th weekday of a month (first Monday of September),
//! * an offset from Easter Sunday (Good Friday = −2),
//! * the Monday on or before a fixed month/day (Victoria Day).
//!
//! [`HolidayDefinition`] names a rule and optionally the first year it is
//! observed; evaluating it for a year yields a [`Holiday`].

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::easter::easter_sunday;
use crate::month_day::MonthDay;
use crate::weekday::Weekday;

/// Easter offsets that keep the holiday inside Easter's own year for every
/// Easter date (March 22 to April 25).
const EASTER_OFFSET_RANGE: std::ops::RangeInclusive<i32> = -80..=250;

/// How a holiday's date is determined each year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayRule {
    /// The same month/day every year.
    Fixed(MonthDay),
    /// The `n`-th `weekday` of `month` (n = 1…5).
    NthWeekday {
        /// Occurrence, starting at 1.
        n: u8,
        /// Day of the week.
        weekday: Weekday,
        /// Month (1–12).
        month: u8,
    },
    /// Easter Sunday plus this many days (negative = before).
    EasterOffset(i32),
    /// The Monday on or before the given month/day.
    MondayOnOrBefore(MonthDay),
}

impl HolidayRule {
    /// The date this rule produces in `year`, if any.
    ///
    /// Returns `None` when the date does not exist that year (February 29 in
    /// a non-leap year, a fifth weekday that the month lacks), falls outside
    /// the supported date range, or lands in a neighbouring year.
    pub fn date_in(&self, year: u16) -> Option<Date> {
        let date = match *self {
            HolidayRule::Fixed(md) => md.in_year(year),
            HolidayRule::NthWeekday { n, weekday, month } => {
                Date::nth_weekday(n, weekday, year, month).ok()
            }
            HolidayRule::EasterOffset(offset) => easter_sunday(year)?.add_days(offset).ok(),
            HolidayRule::MondayOnOrBefore(md) => md
                .in_year(year)?
                .previous_weekday_on_or_before(Weekday::Monday)
                .ok(),
        }?;
        (date.year() == year).then_some(date)
    }

    /// `false` only for fixed month/day rules.
    pub fn is_moveable(&self) -> bool {
        !matches!(self, HolidayRule::Fixed(_))
    }

    /// Check the rule's parameters, returning a description of the problem.
    pub fn check(&self) -> Result<(), String> {
        match *self {
            HolidayRule::NthWeekday { n, month, .. } => {
                if !(1..=5).contains(&n) {
                    return Err(format!("occurrence {n} out of range [1, 5]"));
                }
                if !(1..=12).contains(&month) {
                    return Err(format!("month {month} out of range [1, 12]"));
                }
                Ok(())
            }
            HolidayRule::EasterOffset(offset) if !EASTER_OFFSET_RANGE.contains(&offset) => {
                Err(format!(
                    "Easter offset {offset} out of range [{}, {}]",
                    EASTER_OFFSET_RANGE.start(),
                    EASTER_OFFSET_RANGE.end()
                ))
            }
            HolidayRule::MondayOnOrBefore(md) if md.month() == 1 && md.day() < 7 => Err(format!(
                "Monday on or before {md} can fall in the previous year"
            )),
            _ => Ok(()),
        }
    }
}

/// A named holiday rule, optionally observed only from a given year on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayDefinition {
    /// Display name (e.g. `"Labour Day"`).
    pub name: String,
    /// Date rule.
    pub rule: HolidayRule,
    /// First year in which the holiday is observed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<u16>,
}

impl HolidayDefinition {
    /// Create a definition observed in every year.
    pub fn new(name: impl Into<String>, rule: HolidayRule) -> Self {
        Self {
            name: name.into(),
            rule,
            since: None,
        }
    }

    /// Restrict the definition to `year` and later.
    pub fn since(mut self, year: u16) -> Self {
        self.since = Some(year);
        self
    }

    /// Evaluate the definition for `year`.
    pub fn holiday_in(&self, year: u16) -> Option<Holiday> {
        holiday_from_rule(&self.name, &self.rule, self.since, year)
    }
}

/// Evaluate a rule for `year`, honouring a first-observed year.
pub(crate) fn holiday_from_rule(
    name: &str,
    rule: &HolidayRule,
    since: Option<u16>,
    year: u16,
) -> Option<Holiday> {
    if since.is_some_and(|first| year < first) {
        return None;
    }
    let date = rule.date_in(year)?;
    Some(Holiday::new(name, date, rule.is_moveable()))
}

/// A holiday instantiated for one year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// Stable identifier, `<slug-of-name>-<year>`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Month and day (`MM-DD`).
    pub month_day: MonthDay,
    /// Year the holiday was computed for.
    pub year: u16,
    /// `true` when the date changes from year to year.
    pub is_moveable: bool,
    /// The concrete date.
    pub date: Date,
}

impl Holiday {
    /// Build a holiday falling on `date`.
    pub fn new(name: &str, date: Date, is_moveable: bool) -> Self {
        let year = date.year();
        Self {
            id: format!("{}-{year}", slug(name)),
            name: name.to_string(),
            month_day: MonthDay::from(date),
            year,
            is_moveable,
            date,
        }
    }
}

/// Lower-case ASCII slug: alphanumerics kept, every other run becomes `-`.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
