//! Error types for labrota.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.
//!
//! Validation findings and partially filled meetings are *not* errors; they
//! are reported as data by the crates that produce them.

use thiserror::Error;

/// The top-level error type used throughout labrota.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (out of range, malformed, arithmetic overflow).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration file or value could not be read or understood.
    #[error("configuration error: {0}")]
    Config(String),

    /// The referenced person is not part of the rotation pool.
    #[error("person `{0}` is not in the rotation pool")]
    UnknownPerson(String),

    /// Every candidate date within the attempt bound was a holiday.
    ///
    /// Signals a calendar configuration problem; distinct from "this date is
    /// a holiday".
    #[error("no non-holiday date found within {attempts} weeks of {from}")]
    NoValidDate {
        /// The date the search started from (`YYYY-MM-DD`).
        from: String,
        /// Number of weekly steps attempted.
        attempts: u32,
    },

    /// Generation settings failed validation with blocking errors.
    #[error("generation settings rejected: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Shorthand `Result` type used throughout labrota.
pub type Result<T, E = Error> = std::result::Result<T, E>;
