//! Calendar generation.
//!
//! A run walks the configured weekday from `start_date` to `end_date`,
//! drops holidays when asked to, alternates meeting types starting with a
//! Research Update, and fills presenter slots from the rotation pool.
//! Nothing is cached between runs; the same inputs always produce the same
//! schedule.

use lr_core::errors::{Error, Result};
use lr_rotation::{after_assignment, select_presenters, Person, QueueEntry};
use lr_time::{Date, HolidayCalendar};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::meeting::{MeetingInstance, MeetingType};
use crate::settings::GenerationSettings;
use crate::validator::validate;

/// A candidate date dropped because it was a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDate {
    /// The dropped date.
    pub date: Date,
    /// Name of the holiday on that date.
    pub holiday: String,
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    /// Meetings in date order.
    pub meetings: Vec<MeetingInstance>,
    /// The pool after every assignment, when one was supplied.
    pub pool: Option<Vec<QueueEntry>>,
    /// Holidays that displaced a meeting.
    pub skipped: Vec<SkippedDate>,
}

impl GeneratedSchedule {
    /// Meetings with at least one empty presenter slot.
    pub fn understaffed(&self) -> impl Iterator<Item = &MeetingInstance> {
        self.meetings.iter().filter(|m| m.unfilled_slots() > 0)
    }
}

/// Generate the meeting series described by `settings`.
///
/// With `pool`, each meeting takes its presenters from the rotation and the
/// pool is updated before the next date is scored.  Without one, meetings
/// are emitted with empty presenter lists.
///
/// # Errors
/// [`Error::InvalidArgument`] if `settings.weekday` is not in `0..=6`;
/// [`Error::Date`] if the first meeting date leaves the supported range.
pub fn generate(
    settings: &GenerationSettings,
    calendar: &dyn HolidayCalendar,
    pool: Option<&[QueueEntry]>,
) -> Result<GeneratedSchedule> {
    let weekday = settings.meeting_weekday().ok_or_else(|| {
        Error::InvalidArgument(format!(
            "weekday {} out of range [0 (Sunday), 6 (Saturday)]",
            settings.weekday
        ))
    })?;

    let mut meetings = Vec::new();
    let mut skipped = Vec::new();
    let mut pool: Option<Vec<QueueEntry>> = pool.map(<[QueueEntry]>::to_vec);
    let mut meeting_type = MeetingType::ResearchUpdate;
    let mut current = settings.start_date.next_weekday_on_or_after(weekday)?;

    while current <= settings.end_date {
        let holiday = if settings.skip_holidays {
            calendar.holiday_name(current)
        } else {
            None
        };

        if let Some(holiday) = holiday {
            debug!(date = %current, %holiday, "skipping holiday");
            skipped.push(SkippedDate {
                date: current,
                holiday,
            });
        } else {
            let slots = meeting_type.presenter_count();
            let presenters: Vec<Person> = match pool.as_mut() {
                Some(entries) => {
                    let picked = select_presenters(entries, current, slots, &settings.policy);
                    *entries = after_assignment(entries, &picked, current, &settings.policy);
                    picked
                }
                None => Vec::new(),
            };
            if pool.is_some() && presenters.len() < slots {
                warn!(
                    date = %current,
                    %meeting_type,
                    filled = presenters.len(),
                    slots,
                    "not enough eligible presenters"
                );
            }
            debug!(date = %current, %meeting_type, presenters = presenters.len(), "meeting scheduled");

            meetings.push(MeetingInstance {
                date: current,
                meeting_type,
                start_time: settings.start_time,
                location: settings.location.clone(),
                duration_minutes: settings.durations.for_type(meeting_type),
                presenters,
                presenter_slots: slots,
            });
            meeting_type = meeting_type.alternate();
        }

        current = match current.add_weeks(1) {
            Ok(next) => next,
            Err(_) => break,
        };
    }

    info!(
        start = %settings.start_date,
        end = %settings.end_date,
        meetings = meetings.len(),
        skipped = skipped.len(),
        "generated meeting calendar"
    );

    Ok(GeneratedSchedule {
        meetings,
        pool,
        skipped,
    })
}

/// Validate `settings` against the people in `pool`, then generate.
///
/// Warnings do not stop generation.
///
/// # Errors
/// [`Error::Validation`] carrying every finding when any of them is
/// blocking; otherwise whatever [`generate`] returns.
pub fn generate_validated(
    settings: &GenerationSettings,
    calendar: &dyn HolidayCalendar,
    pool: &[QueueEntry],
) -> Result<GeneratedSchedule> {
    let people: Vec<Person> = pool.iter().map(|e| e.person.clone()).collect();
    let report = validate(settings, &people);
    if report.has_blocking_errors() {
        return Err(Error::Validation(report.errors()));
    }
    for issue in report.issues() {
        warn!(message = %issue.message, "generation settings warning");
    }
    generate(settings, calendar, Some(pool))
}
