//! `HolidayCalendar` trait and the empty calendar.
//!
//! A holiday calendar knows which dates are holidays in its jurisdiction.
//! Implementors only provide [`HolidayCalendar::holidays_in_year`]; every
//! other query is derived from it, so answers depend on nothing but the
//! arguments (no caching, no wall clock).

use lr_core::errors::{Error, Result};
use tracing::debug;

use crate::date::Date;
use crate::holiday::Holiday;

/// Maximum number of weekly steps [`HolidayCalendar::next_non_holiday_on_same_weekday`]
/// takes before giving up.
pub const MAX_HOLIDAY_SKIP_ATTEMPTS: u32 = 10;

/// A jurisdiction's holiday calendar.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Canada"`).
    fn name(&self) -> &str;

    /// All holidays observed in `year`, ordered by date.
    fn holidays_in_year(&self, year: u16) -> Vec<Holiday>;

    /// Return `true` if `date` is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Name of the holiday falling on `date`, if any.
    ///
    /// When several holidays share a date the first in the calendar's
    /// ordering is returned.
    fn holiday_name(&self, date: Date) -> Option<String> {
        self.holidays_in_year(date.year())
            .into_iter()
            .find(|h| h.date == date)
            .map(|h| h.name)
    }

    /// All holidays between `start` and `end` inclusive, ordered by date.
    ///
    /// Every year the range touches is expanded.  An inverted range yields
    /// an empty list.
    fn holidays_in_range(&self, start: Date, end: Date) -> Vec<Holiday> {
        if start > end {
            return Vec::new();
        }
        (start.year()..=end.year())
            .flat_map(|year| self.holidays_in_year(year))
            .filter(|h| h.date >= start && h.date <= end)
            .collect()
    }

    /// First non-holiday on the same weekday, starting from `date` itself.
    ///
    /// Returns `date` when it is not a holiday; otherwise steps forward a
    /// week at a time, at most [`MAX_HOLIDAY_SKIP_ATTEMPTS`] times.
    ///
    /// # Errors
    /// [`Error::NoValidDate`] when `date` and every candidate within the
    /// bound are holidays; [`Error::Date`] if stepping leaves the supported
    /// range.
    fn next_non_holiday_on_same_weekday(&self, date: Date) -> Result<Date> {
        let mut candidate = date;
        for attempt in 0..=MAX_HOLIDAY_SKIP_ATTEMPTS {
            if attempt > 0 {
                candidate = candidate.add_weeks(1)?;
            }
            match self.holiday_name(candidate) {
                None => return Ok(candidate),
                Some(name) => debug!(calendar = self.name(), date = %candidate, holiday = %name, "candidate is a holiday"),
            }
        }
        Err(Error::NoValidDate {
            from: date.to_string(),
            attempts: MAX_HOLIDAY_SKIP_ATTEMPTS,
        })
    }
}

impl<C: HolidayCalendar + ?Sized> HolidayCalendar for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn holidays_in_year(&self, year: u16) -> Vec<Holiday> {
        (**self).holidays_in_year(year)
    }
}

/// A calendar with no holidays at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "No holidays"
    }

    fn holidays_in_year(&self, _year: u16) -> Vec<Holiday> {
        Vec::new()
    }
}
