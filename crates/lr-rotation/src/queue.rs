//! `QueueEntry`: one person's rotation state.

use lr_time::{weeks_between, Date};
use serde::{Deserialize, Serialize};

use crate::person::{Person, PersonId};

/// Rotation state for one person.
///
/// Created when the person joins the pool, replaced after every assignment
/// or postponement, and kept while the person is inactive so that history
/// survives a reactivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// The person.
    pub person: Person,
    /// Date of the most recent presentation.
    #[serde(default)]
    pub last_presented_date: Option<Date>,
    /// Explicit commitment: the only date this person may be selected for.
    #[serde(default)]
    pub next_scheduled_date: Option<Date>,
    /// Postponements since the last presentation.
    #[serde(default)]
    pub postpone_count: u32,
    /// Running manual/administrative adjustment added to the score.
    #[serde(default)]
    pub priority: i32,
}

impl QueueEntry {
    /// A fresh entry: never presented, no commitment, no adjustments.
    pub fn new(person: Person) -> Self {
        Self {
            person,
            last_presented_date: None,
            next_scheduled_date: None,
            postpone_count: 0,
            priority: 0,
        }
    }

    /// Set the last presentation date.
    pub fn with_last_presented(mut self, date: Date) -> Self {
        self.last_presented_date = Some(date);
        self
    }

    /// Commit the person to `date`.
    pub fn with_next_scheduled(mut self, date: Date) -> Self {
        self.next_scheduled_date = Some(date);
        self
    }

    /// Set the postponement count.
    pub fn with_postpone_count(mut self, count: u32) -> Self {
        self.postpone_count = count;
        self
    }

    /// Set the priority adjustment.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// The person's id.
    pub fn id(&self) -> &PersonId {
        &self.person.id
    }

    /// Whole weeks from the last presentation to `date`, or `never` if the
    /// person has not presented yet.
    pub fn weeks_since_last(&self, date: Date, never: u32) -> u32 {
        self.last_presented_date
            .map_or(never, |last| weeks_between(last, date))
    }

    /// `true` if the person is committed to exactly `date`.
    pub fn is_committed_to(&self, date: Date) -> bool {
        self.next_scheduled_date == Some(date)
    }
}
