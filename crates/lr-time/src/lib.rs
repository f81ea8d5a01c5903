//! # lr-time
//!
//! Calendar dates, weekdays, Easter, holiday rules, and the
//! [`HolidayCalendar`] trait with its built-in jurisdictions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the empty calendar.
pub mod calendar;

/// Concrete holiday calendars (jurisdictions, rule-based, joint).
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// `Holiday` values and the rules that produce them.
pub mod holiday;

/// `MonthDay`: a month/day pair without a year.
pub mod month_day;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, NoHolidays, MAX_HOLIDAY_SKIP_ATTEMPTS};
pub use calendars::{Canada, Closure, JointCalendar, Jurisdiction, RuleCalendar};
pub use date::{weeks_between, Date};
pub use easter::easter_sunday;
pub use holiday::{Holiday, HolidayDefinition, HolidayRule};
pub use month_day::MonthDay;
pub use weekday::Weekday;
