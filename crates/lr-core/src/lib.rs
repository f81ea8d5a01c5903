//! # lr-core
//!
//! Core definitions shared across the labrota workspace: the error
//! hierarchy and TOML configuration loading.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// TOML configuration loading.
pub mod config;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
