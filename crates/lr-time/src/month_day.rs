//! `MonthDay`: a month/day pair without a year, written `MM-DD`.

use std::str::FromStr;

use lr_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;

/// A day of the year independent of any particular year (e.g. `12-25`).
///
/// February 29 is accepted; it simply does not occur in non-leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

/// Longest month length for each month, allowing February 29.
const MAX_DAYS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl MonthDay {
    /// Create a month/day pair, validating the month and the day against the
    /// longest possible length of that month.
    pub fn new(month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let max = MAX_DAYS[month as usize - 1];
        if day == 0 || day > max {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {max}] for month {month:02}"
            )));
        }
        Ok(Self { month, day })
    }

    /// Unchecked constructor for the built-in holiday tables.
    pub(crate) const fn new_const(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The date this month/day falls on in `year`, if it exists.
    pub fn in_year(&self, year: u16) -> Option<Date> {
        Date::from_ymd(year, self.month, self.day).ok()
    }
}

impl From<Date> for MonthDay {
    fn from(date: Date) -> Self {
        Self {
            month: date.month(),
            day: date.day_of_month(),
        }
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Date(format!("cannot parse `{s}` as MM-DD"));
        let (m, d) = s.trim().split_once('-').ok_or_else(bad)?;
        if m.len() != 2 || d.len() != 2 {
            return Err(bad());
        }
        let month: u8 = m.parse().map_err(|_| bad())?;
        let day: u8 = d.parse().map_err(|_| bad())?;
        Self::new(month, day)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
