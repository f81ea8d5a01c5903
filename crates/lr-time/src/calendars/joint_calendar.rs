//! Joint calendar: the union of several calendars' holidays.
//!
//! Typical use: a national jurisdiction combined with a lab's own
//! [`RuleCalendar`](super::RuleCalendar) of closures.

use crate::calendar::HolidayCalendar;
use crate::holiday::Holiday;

/// A calendar whose holidays are those of any constituent calendar.
pub struct JointCalendar {
    calendars: Vec<Box<dyn HolidayCalendar>>,
    name: String,
}

impl std::fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar")
            .field("name", &self.name)
            .field("calendars", &self.calendars.len())
            .finish()
    }
}

impl JointCalendar {
    /// Combine `calendars`.  An empty list yields a calendar without
    /// holidays.
    pub fn new(calendars: Vec<Box<dyn HolidayCalendar>>) -> Self {
        let name = calendars
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        Self { calendars, name }
    }

    /// Number of constituent calendars.
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Return `true` if there are no constituent calendars.
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

impl HolidayCalendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays_in_year(&self, year: u16) -> Vec<Holiday> {
        let mut holidays: Vec<Holiday> = self
            .calendars
            .iter()
            .flat_map(|c| c.holidays_in_year(year))
            .collect();
        // Stable: on shared dates the earlier calendar's holiday comes first
        holidays.sort_by_key(|h| h.date);
        holidays.dedup_by(|a, b| a.date == b.date && a.name == b.name);
        holidays
    }
}
