//! Fairness scoring and presenter selection.
//!
//! # Eligibility
//! An entry may present on a meeting date when the person is active, has not
//! presented within [`RotationPolicy::min_gap_weeks`], and is either
//! uncommitted or committed to exactly that date.
//!
//! # Score
//! ```text
//! score = base
//!       + weeks_since_last × weekly_bonus
//!       − postpone_count × postpone_penalty
//!       + overdue_bonus            (if weeks_since_last > overdue_threshold)
//!       + priority
//! ```
//! clamped at zero.  Someone who has never presented counts as
//! [`RotationPolicy::never_presented_weeks`] weeks overdue.
//!
//! # Order
//! Entries committed to the meeting date come first, then higher scores;
//! equal scores are ordered by person id so results are reproducible.

use std::cmp::Ordering;

use lr_time::Date;
use serde::{Deserialize, Serialize};

use crate::person::Person;
use crate::policy::RotationPolicy;
use crate::queue::QueueEntry;

/// The inputs that produced a [`RotationScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactors {
    /// Whole weeks since the last presentation (or the never-presented
    /// default).
    pub weeks_since_last: u32,
    /// Recorded postponements.
    pub postpone_count: u32,
    /// Linear bonus, `weeks_since_last × weekly_bonus`.
    pub fairness_bonus: i64,
    /// Step bonus for severely overdue candidates (zero otherwise).
    pub overdue_bonus: i64,
    /// The entry's carried priority.
    pub priority: i32,
    /// `true` if the entry is committed to the scored date.
    pub committed: bool,
}

/// A candidate's score for one meeting date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationScore {
    /// The candidate.
    pub person: Person,
    /// Non-negative score; higher presents sooner.
    pub score: i64,
    /// Inputs used.
    pub factors: ScoreFactors,
}

/// Whether `entry` may present on `meeting_date`.
pub fn is_eligible(entry: &QueueEntry, meeting_date: Date, policy: &RotationPolicy) -> bool {
    if !entry.person.is_active {
        return false;
    }
    let gap_ok = entry
        .last_presented_date
        .map_or(true, |last| lr_time::weeks_between(last, meeting_date) >= policy.min_gap_weeks);
    let commitment_ok = entry
        .next_scheduled_date
        .map_or(true, |scheduled| scheduled == meeting_date);
    gap_ok && commitment_ok
}

/// Score `entry` for `meeting_date`, regardless of eligibility.
pub fn score_entry(entry: &QueueEntry, meeting_date: Date, policy: &RotationPolicy) -> RotationScore {
    let weeks = entry.weeks_since_last(meeting_date, policy.never_presented_weeks);
    let fairness_bonus = i64::from(weeks) * policy.weekly_bonus;
    let overdue_bonus = if weeks > policy.overdue_threshold_weeks {
        policy.overdue_bonus
    } else {
        0
    };
    let score = policy.base_score + fairness_bonus
        - i64::from(entry.postpone_count) * policy.postpone_penalty
        + overdue_bonus
        + i64::from(entry.priority);

    RotationScore {
        person: entry.person.clone(),
        score: score.max(0),
        factors: ScoreFactors {
            weeks_since_last: weeks,
            postpone_count: entry.postpone_count,
            fairness_bonus,
            overdue_bonus,
            priority: entry.priority,
            committed: entry.is_committed_to(meeting_date),
        },
    }
}

fn selection_order(a: &RotationScore, b: &RotationScore) -> Ordering {
    b.factors
        .committed
        .cmp(&a.factors.committed)
        .then_with(|| b.score.cmp(&a.score))
        .then_with(|| a.person.id.cmp(&b.person.id))
}

/// Score every eligible entry for `meeting_date`, best candidate first.
pub fn rank_candidates(
    pool: &[QueueEntry],
    meeting_date: Date,
    policy: &RotationPolicy,
) -> Vec<RotationScore> {
    let mut scores: Vec<RotationScore> = pool
        .iter()
        .filter(|entry| is_eligible(entry, meeting_date, policy))
        .map(|entry| score_entry(entry, meeting_date, policy))
        .collect();
    scores.sort_by(selection_order);
    scores
}

/// Pick up to `count` presenters for `meeting_date`.
///
/// Returns fewer than `count` people when the pool has too few eligible
/// entries; ineligible people are never substituted.
pub fn select_presenters(
    pool: &[QueueEntry],
    meeting_date: Date,
    count: usize,
    policy: &RotationPolicy,
) -> Vec<Person> {
    rank_candidates(pool, meeting_date, policy)
        .into_iter()
        .take(count)
        .map(|s| s.person)
        .collect()
}
