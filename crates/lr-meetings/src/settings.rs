//! Generation settings and configuration loading.
//!
//! ```toml
//! start_date = "2024-01-01"
//! end_date = "2024-06-28"
//! weekday = 1            # 0 = Sunday … 6 = Saturday
//! start_time = "14:00"
//! location = "Room 204"
//! skip_holidays = true
//!
//! [durations]
//! journal_club = 75
//!
//! [holidays]
//! jurisdiction = "canada"
//!
//! [holidays.extra]
//! name = "Lab"
//!
//! [[holidays.extra.closures]]
//! name = "Lab retreat"
//! date = "2024-06-10"
//!
//! [policy]
//! min_gap_weeks = 3
//! ```

use std::path::Path;

use chrono::NaiveTime;
use lr_core::config;
use lr_core::errors::Result;
use lr_rotation::RotationPolicy;
use lr_time::{Date, HolidayCalendar, Jurisdiction, RuleCalendar, Weekday};
use serde::{Deserialize, Serialize};

use crate::meeting::{hhmm, MeetingType};

/// Per-type meeting lengths, in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeetingDurations {
    /// Research Update length.
    pub research_update: u32,
    /// Journal Club length.
    pub journal_club: u32,
}

impl Default for MeetingDurations {
    fn default() -> Self {
        Self {
            research_update: MeetingType::ResearchUpdate.default_duration_minutes(),
            journal_club: MeetingType::JournalClub.default_duration_minutes(),
        }
    }
}

impl MeetingDurations {
    /// Length for `meeting_type`.
    pub fn for_type(&self, meeting_type: MeetingType) -> u32 {
        match meeting_type {
            MeetingType::ResearchUpdate => self.research_update,
            MeetingType::JournalClub => self.journal_club,
        }
    }
}

/// Which holidays block meeting dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HolidaySettings {
    /// Built-in jurisdiction.
    pub jurisdiction: Jurisdiction,
    /// Additional rules and closures on top of the jurisdiction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<RuleCalendar>,
}

impl HolidaySettings {
    /// Build the configured calendar.
    pub fn calendar(&self) -> Result<Box<dyn HolidayCalendar>> {
        match &self.extra {
            None => Ok(self.jurisdiction.calendar()),
            Some(extra) => {
                extra.validate()?;
                let joint: Box<dyn HolidayCalendar> =
                    Box::new(self.jurisdiction.with_extra(extra.clone()));
                Ok(joint)
            }
        }
    }
}

/// Parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationSettings {
    /// First date considered (inclusive).
    pub start_date: Date,
    /// Last date considered (inclusive).
    pub end_date: Date,
    /// Meeting weekday, 0 = Sunday … 6 = Saturday.
    pub weekday: u8,
    /// Local start time (`HH:MM`).
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Room or link.
    pub location: String,
    /// Skip dates the holiday calendar blocks.
    #[serde(default = "skip_by_default")]
    pub skip_holidays: bool,
    /// Meeting lengths.
    #[serde(default)]
    pub durations: MeetingDurations,
    /// Holiday calendar selection.
    #[serde(default)]
    pub holidays: HolidaySettings,
    /// Rotation scoring constants.
    #[serde(default)]
    pub policy: RotationPolicy,
}

fn skip_by_default() -> bool {
    true
}

impl GenerationSettings {
    /// Settings with default durations, holidays, and policy.
    pub fn new(
        start_date: Date,
        end_date: Date,
        weekday: Weekday,
        start_time: NaiveTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            weekday: weekday.sunday_index(),
            start_time,
            location: location.into(),
            skip_holidays: true,
            durations: MeetingDurations::default(),
            holidays: HolidaySettings::default(),
            policy: RotationPolicy::default(),
        }
    }

    /// Turn holiday skipping on or off.
    pub fn with_skip_holidays(mut self, skip: bool) -> Self {
        self.skip_holidays = skip;
        self
    }

    /// Parse settings from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        config::from_toml_str(content)
    }

    /// Read settings from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        config::from_toml_file(path)
    }

    /// The configured meeting weekday, if the index is in range.
    pub fn meeting_weekday(&self) -> Option<Weekday> {
        Weekday::from_sunday_index(self.weekday)
    }
}
