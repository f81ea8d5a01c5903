//! Pool updates after assignments and postponements.
//!
//! Every function takes the current pool by reference and returns the next
//! pool; the input is never modified.

use std::str::FromStr;

use lr_core::errors::{Error, Result};
use lr_time::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::person::{Person, PersonId};
use crate::policy::RotationPolicy;
use crate::queue::QueueEntry;

/// What happens to a presenter's turn when they postpone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostponeStrategy {
    /// The turn is forfeited; nobody is rescheduled.
    #[default]
    Skip,
    /// The presenter is committed to the same weekday a week later.
    Cascade,
}

impl FromStr for PostponeStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(PostponeStrategy::Skip),
            "cascade" => Ok(PostponeStrategy::Cascade),
            other => Err(Error::InvalidArgument(format!(
                "unknown postpone strategy `{other}` (expected `skip` or `cascade`)"
            ))),
        }
    }
}

impl std::fmt::Display for PostponeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostponeStrategy::Skip => f.write_str("skip"),
            PostponeStrategy::Cascade => f.write_str("cascade"),
        }
    }
}

/// `floor(weeks_since_last / weeks_per_priority_point) − postpone_count`,
/// measured against `reference`.
pub fn recomputed_priority(entry: &QueueEntry, reference: Date, policy: &RotationPolicy) -> i32 {
    let weeks = entry.weeks_since_last(reference, policy.never_presented_weeks);
    let points = weeks / policy.weeks_per_priority_point.max(1);
    i32::try_from(points)
        .unwrap_or(i32::MAX)
        .saturating_sub(i32::try_from(entry.postpone_count).unwrap_or(i32::MAX))
}

/// Record that `assigned` presented on `meeting_date`.
///
/// Assigned entries get `last_presented_date = meeting_date`, lose any
/// commitment, and have their postponements reset.  Every entry's priority
/// is then recomputed against `meeting_date`.
pub fn after_assignment(
    pool: &[QueueEntry],
    assigned: &[Person],
    meeting_date: Date,
    policy: &RotationPolicy,
) -> Vec<QueueEntry> {
    pool.iter()
        .map(|entry| {
            let mut next = entry.clone();
            if assigned.iter().any(|p| p.id == entry.person.id) {
                next.last_presented_date = Some(meeting_date);
                next.next_scheduled_date = None;
                next.postpone_count = 0;
            }
            next.priority = recomputed_priority(&next, meeting_date, policy);
            next
        })
        .collect()
}

/// Record that `person` postponed their presentation on `original_date`.
///
/// Both strategies increment the person's postponement count and lower their
/// priority by [`RotationPolicy::postpone_penalty`].  With
/// [`PostponeStrategy::Cascade`] the person is also committed to
/// `original_date + cascade_delay_days`, and every other entry's priority is
/// recomputed against `original_date`; their commitments are left alone.
///
/// # Errors
/// [`Error::UnknownPerson`] if `person` is not in the pool;
/// [`Error::Date`] if the cascaded date leaves the supported range.
pub fn after_postponement(
    pool: &[QueueEntry],
    person: &PersonId,
    original_date: Date,
    strategy: PostponeStrategy,
    policy: &RotationPolicy,
) -> Result<Vec<QueueEntry>> {
    if !pool.iter().any(|e| &e.person.id == person) {
        return Err(Error::UnknownPerson(person.to_string()));
    }
    let rescheduled = match strategy {
        PostponeStrategy::Skip => None,
        PostponeStrategy::Cascade => Some(original_date.add_days(policy.cascade_delay_days)?),
    };
    let penalty = i32::try_from(policy.postpone_penalty).unwrap_or(i32::MAX);
    debug!(%person, date = %original_date, %strategy, "postponement recorded");

    Ok(pool
        .iter()
        .map(|entry| {
            let mut next = entry.clone();
            if &entry.person.id == person {
                next.postpone_count += 1;
                next.priority = next.priority.saturating_sub(penalty);
                if let Some(date) = rescheduled {
                    next.next_scheduled_date = Some(date);
                }
            } else if strategy == PostponeStrategy::Cascade {
                next.priority = recomputed_priority(&next, original_date, policy);
            }
            next
        })
        .collect())
}

/// Drop `person`'s commitment so they can be scored for any date again.
///
/// # Errors
/// [`Error::UnknownPerson`] if `person` is not in the pool.
pub fn clear_commitment(pool: &[QueueEntry], person: &PersonId) -> Result<Vec<QueueEntry>> {
    if !pool.iter().any(|e| &e.person.id == person) {
        return Err(Error::UnknownPerson(person.to_string()));
    }
    Ok(pool
        .iter()
        .map(|entry| {
            let mut next = entry.clone();
            if &entry.person.id == person {
                next.next_scheduled_date = None;
            }
            next
        })
        .collect())
}
