//! Concrete holiday calendars.

use serde::{Deserialize, Serialize};

use crate::calendar::{HolidayCalendar, NoHolidays};

/// Canada (federal and Ontario statutory holidays).
pub mod canada;

/// Union of several calendars.
pub mod joint_calendar;

/// Calendar built from configurable rules and closure dates.
pub mod rule_calendar;

pub use canada::Canada;
pub use joint_calendar::JointCalendar;
pub use rule_calendar::{Closure, RuleCalendar};

/// Built-in jurisdictions selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// [`Canada`].
    #[default]
    Canada,
    /// [`NoHolidays`].
    None,
}

impl Jurisdiction {
    /// The calendar for this jurisdiction.
    pub fn calendar(self) -> Box<dyn HolidayCalendar> {
        match self {
            Jurisdiction::Canada => Box::new(Canada),
            Jurisdiction::None => Box::new(NoHolidays),
        }
    }

    /// The jurisdiction's calendar joined with `extra` rules and closures.
    pub fn with_extra(self, extra: RuleCalendar) -> JointCalendar {
        JointCalendar::new(vec![self.calendar(), Box::new(extra)])
    }
}
