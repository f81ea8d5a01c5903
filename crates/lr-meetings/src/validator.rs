//! Pre-generation checks.
//!
//! Every check runs; problems are collected rather than short-circuited,
//! and returned as data so the caller decides whether to go ahead.

use lr_rotation::Person;
use serde::{Deserialize, Serialize};

use crate::settings::GenerationSettings;

/// Ranges longer than this many days draw a warning.
const LONG_RANGE_DAYS: i32 = 52 * 7;

/// Minimum number of active people for a meaningful rotation.
pub const MIN_ACTIVE_MEMBERS: usize = 2;

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Generation would be wrong or meaningless.
    Error,
    /// Generation works but the input is unusual.
    Warning,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Error or warning.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn error(&mut self, message: String) {
        self.issues.push(ValidationIssue {
            severity: Severity::Error,
            message,
        });
    }

    fn warning(&mut self, message: String) {
        self.issues.push(ValidationIssue {
            severity: Severity::Warning,
            message,
        });
    }

    /// `true` when there are no findings at all.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Every finding's message, warnings included, in check order.
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.message.clone()).collect()
    }

    /// `true` when a finding other than a warning is present.
    pub fn has_blocking_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// All findings.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

/// Check `settings` against the people available to the rotation.
///
/// Inactive people in `people` are ignored.
pub fn validate(settings: &GenerationSettings, people: &[Person]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if settings.end_date <= settings.start_date {
        report.error(format!(
            "end date {} must be after start date {}",
            settings.end_date, settings.start_date
        ));
    }

    if settings.weekday > 6 {
        report.error(format!(
            "weekday {} out of range [0 (Sunday), 6 (Saturday)]",
            settings.weekday
        ));
    }

    let active = people.iter().filter(|p| p.is_active).count();
    if active < MIN_ACTIVE_MEMBERS {
        report.error(format!(
            "rotation needs at least {MIN_ACTIVE_MEMBERS} active members, found {active}"
        ));
    }

    let span = settings.start_date.days_between(settings.end_date);
    if span > LONG_RANGE_DAYS {
        report.warning(format!(
            "date range spans {} weeks; ranges longer than 52 weeks are not recommended",
            span / 7
        ));
    }

    report
}
