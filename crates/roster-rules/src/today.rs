//! Project weekly schedules onto a specific calendar date.
//!
//! This is the canonical fallback path used when the precomputed
//! today-schedule source returns no rows for a date, so it must be
//! independently correct rather than mirror that source.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::schedule::{NamedRecord, PhysicianDirectory, Weekday, WeeklySchedule};

/// Display fallback when the physician record cannot be resolved.
pub const UNKNOWN_PHYSICIAN: &str = "Unknown Physician";

/// Display fallback when a nested speciality/degree record is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// The projection of one [`WeeklySchedule`] onto a specific calendar date.
///
/// Derived and ephemeral: recomputed on demand, never persisted by this
/// engine. Display fields are denormalized from the physician listing so the
/// caller can render the row without another join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayScheduleInstance {
    pub source_schedule_id: String,
    pub physician_id: String,
    pub physician_name: String,
    pub speciality: String,
    pub degree: String,
    pub clinic_time_from: String,
    pub clinic_time_to: String,
    pub day: Weekday,
    pub date: NaiveDate,
}

/// Compute the schedule instances effective on `target_date`.
///
/// A schedule qualifies when it is active, started on or before the date,
/// and lists the date's weekday in its day set. Physician display fields are
/// joined from `physicians`; an unresolvable physician or nested record
/// degrades to placeholder text instead of failing the whole pass.
///
/// Returns a fresh list on every call, in the input order. Nothing is
/// cached — callers that refresh periodically own that loop.
pub fn resolve_for_date(
    target_date: NaiveDate,
    schedules: &[WeeklySchedule],
    physicians: &PhysicianDirectory,
) -> Vec<TodayScheduleInstance> {
    let weekday = Weekday::from_chrono(target_date.weekday());

    schedules
        .iter()
        .filter(|schedule| {
            schedule.is_active
                && schedule.start_date <= target_date
                && schedule.days.contains(&weekday)
        })
        .map(|schedule| {
            let physician = physicians.get(&schedule.physician_id);
            TodayScheduleInstance {
                source_schedule_id: schedule.id.clone(),
                physician_id: schedule.physician_id.clone(),
                physician_name: physician
                    .map_or_else(|| UNKNOWN_PHYSICIAN.to_string(), |p| p.name.clone()),
                speciality: display_name(physician.and_then(|p| p.speciality.as_ref())),
                degree: display_name(physician.and_then(|p| p.degree.as_ref())),
                clinic_time_from: schedule.start_time.clone(),
                clinic_time_to: schedule.end_time.clone(),
                day: weekday,
                date: target_date,
            }
        })
        .collect()
}

fn display_name(record: Option<&NamedRecord>) -> String {
    record.map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.name.clone())
}
