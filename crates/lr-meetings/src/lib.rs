//! # lr-meetings
//!
//! Meeting calendars for a research group: a weekly series alternating
//! Research Update and Journal Club sessions, skipping holidays, with
//! presenters drawn from the rotation pool.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Calendar generation.
pub mod generator;

/// Meeting types and generated instances.
pub mod meeting;

/// Generation settings and configuration loading.
pub mod settings;

/// Pre-generation checks.
pub mod validator;

pub use generator::{generate, generate_validated, GeneratedSchedule, SkippedDate};
pub use meeting::{MeetingInstance, MeetingType};
pub use settings::{GenerationSettings, HolidaySettings, MeetingDurations};
pub use validator::{validate, Severity, ValidationIssue, ValidationReport};
