//! Tunable scoring constants.

use serde::{Deserialize, Serialize};

/// Constants driving eligibility, scoring, and queue updates.
///
/// The defaults reproduce the standard rotation; every field can be
/// overridden from configuration (missing fields keep their default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotationPolicy {
    /// Minimum whole weeks between two presentations by the same person.
    pub min_gap_weeks: u32,
    /// Score every eligible candidate starts from.
    pub base_score: i64,
    /// Points per week since the last presentation.
    pub weekly_bonus: i64,
    /// Points removed per recorded postponement; also the priority penalty
    /// applied when a postponement happens.
    pub postpone_penalty: i64,
    /// Weeks since last presentation above which the overdue bonus applies.
    pub overdue_threshold_weeks: u32,
    /// Step bonus for candidates past the overdue threshold.
    pub overdue_bonus: i64,
    /// Weeks assumed for someone who has never presented.
    pub never_presented_weeks: u32,
    /// Weeks per priority point when priorities are recomputed.
    pub weeks_per_priority_point: u32,
    /// Days a cascaded postponement moves the presenter's commitment.
    pub cascade_delay_days: i32,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            min_gap_weeks: 4,
            base_score: 100,
            weekly_bonus: 10,
            postpone_penalty: 20,
            overdue_threshold_weeks: 8,
            overdue_bonus: 50,
            never_presented_weeks: 12,
            weeks_per_priority_point: 2,
            cascade_delay_days: 7,
        }
    }
}
