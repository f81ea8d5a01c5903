//! Meeting types and generated instances.

use chrono::NaiveTime;
use lr_rotation::Person;
use lr_time::Date;
use serde::{Deserialize, Serialize};

/// The two kinds of recurring group meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    /// Two presenters report on their research; 120 minutes.
    ResearchUpdate,
    /// One presenter discusses a paper; 60 minutes.
    JournalClub,
}

impl MeetingType {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            MeetingType::ResearchUpdate => "Research Update",
            MeetingType::JournalClub => "Journal Club",
        }
    }

    /// Standard length in minutes.
    pub fn default_duration_minutes(&self) -> u32 {
        match self {
            MeetingType::ResearchUpdate => 120,
            MeetingType::JournalClub => 60,
        }
    }

    /// Number of presenters the meeting needs.
    pub fn presenter_count(&self) -> usize {
        match self {
            MeetingType::ResearchUpdate => 2,
            MeetingType::JournalClub => 1,
        }
    }

    /// The type of the following meeting in the series.
    pub fn alternate(&self) -> MeetingType {
        match self {
            MeetingType::ResearchUpdate => MeetingType::JournalClub,
            MeetingType::JournalClub => MeetingType::ResearchUpdate,
        }
    }
}

impl std::fmt::Display for MeetingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One generated meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingInstance {
    /// Meeting date.
    pub date: Date,
    /// Research Update or Journal Club.
    pub meeting_type: MeetingType,
    /// Local start time.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Room or link.
    pub location: String,
    /// Length in minutes.
    pub duration_minutes: u32,
    /// Assigned presenters, best candidate first.  May be shorter than
    /// `presenter_slots`, or empty when no rotation pool was supplied.
    pub presenters: Vec<Person>,
    /// Presenters the meeting type calls for.
    pub presenter_slots: usize,
}

impl MeetingInstance {
    /// Slots left without a presenter.
    pub fn unfilled_slots(&self) -> usize {
        self.presenter_slots.saturating_sub(self.presenters.len())
    }
}

/// `HH:MM` text form for [`NaiveTime`].
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&t.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(d)?;
        NaiveTime::parse_from_str(text.trim(), "%H:%M").map_err(serde::de::Error::custom)
    }
}
