//! # labrota
//!
//! Weekly research-group meeting calendars with a fair presenter rotation.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than on the individual
//! `lr-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! labrota = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveTime;
//! use labrota::meetings::{generate, GenerationSettings, MeetingType};
//! use labrota::rotation::{Person, QueueEntry};
//! use labrota::time::{Canada, Date, Weekday};
//!
//! let settings = GenerationSettings::new(
//!     Date::from_ymd(2024, 1, 1)?,
//!     Date::from_ymd(2024, 1, 31)?,
//!     Weekday::Monday,
//!     NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
//!     "Room 204",
//! );
//! let pool: Vec<QueueEntry> = ["ana", "ben", "cy"]
//!     .iter()
//!     .map(|id| QueueEntry::new(Person::new(*id, *id)))
//!     .collect();
//!
//! let schedule = generate(&settings, &Canada, Some(&pool))?;
//! // New Year's Day is skipped; the series opens on January 8.
//! assert_eq!(schedule.meetings[0].date, Date::from_ymd(2024, 1, 8)?);
//! assert_eq!(schedule.meetings[0].meeting_type, MeetingType::ResearchUpdate);
//! assert_eq!(schedule.meetings[0].presenters.len(), 2);
//! # Ok::<(), labrota::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and configuration loading.
pub use lr_core as core;

/// Dates, weekdays, and holiday calendars.
pub use lr_time as time;

/// Presenter scoring and rotation-pool updates.
pub use lr_rotation as rotation;

/// Meeting calendar generation and validation.
pub use lr_meetings as meetings;
