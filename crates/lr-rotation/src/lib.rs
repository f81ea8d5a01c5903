//! # lr-rotation
//!
//! Presenter rotation for recurring group meetings.
//!
//! The rotation pool is plain data: a slice of [`QueueEntry`] values owned
//! by the caller.  [`scorer`] ranks the pool for a meeting date and picks
//! presenters; [`updater`] returns the next pool state after an assignment
//! or a postponement.  Nothing here keeps state between calls.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// People taking part in the rotation.
pub mod person;

/// Tunable scoring constants.
pub mod policy;

/// Per-person rotation state.
pub mod queue;

/// Fairness scoring and presenter selection.
pub mod scorer;

/// Pool updates after assignments and postponements.
pub mod updater;

pub use person::{Person, PersonId};
pub use policy::RotationPolicy;
pub use queue::QueueEntry;
pub use scorer::{is_eligible, rank_candidates, score_entry, select_presenters, RotationScore, ScoreFactors};
pub use updater::{after_assignment, after_postponement, clear_commitment, PostponeStrategy};
