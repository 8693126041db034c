//! Day/time conflict detection for weekly schedules.
//!
//! Performs pairwise comparison between a candidate schedule and a
//! physician's existing schedules. Back-to-back windows (one ends exactly
//! when another starts) are NOT conflicts.

use serde::{Deserialize, Serialize};

use crate::schedule::{Weekday, WeeklySchedule};

/// A detected conflict between a candidate and an existing schedule on one
/// shared weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOverlap {
    pub existing_id: String,
    pub day: Weekday,
    pub overlap_minutes: u32,
}

/// Find every day/time conflict between `candidate` and the physician's
/// existing active schedules.
///
/// `existing` may contain rows for other physicians or inactive rows; both
/// are skipped. Two windows overlap when `a.start < b.end && b.start < a.end`
/// in minutes since midnight, so `candidate.end == existing.start` is not a
/// conflict. A conflicting pair that shares several weekdays yields one
/// [`ScheduleOverlap`] per shared day.
pub fn find_overlaps(
    candidate: &WeeklySchedule,
    existing: &[WeeklySchedule],
) -> Vec<ScheduleOverlap> {
    let (cand_start, cand_end) = candidate.minutes_window();

    let mut overlaps = Vec::new();
    for schedule in existing {
        if schedule.physician_id != candidate.physician_id || !schedule.is_active {
            continue;
        }

        let shared_days: Vec<Weekday> = candidate
            .days
            .intersection(&schedule.days)
            .copied()
            .collect();
        if shared_days.is_empty() {
            continue;
        }

        let (start, end) = schedule.minutes_window();
        if cand_start < end && start < cand_end {
            let overlap_minutes = cand_end.min(end) - cand_start.max(start);
            for day in shared_days {
                overlaps.push(ScheduleOverlap {
                    existing_id: schedule.id.clone(),
                    day,
                    overlap_minutes,
                });
            }
        }
    }

    overlaps
}

/// True if `candidate` would double-book the physician on any weekday.
///
/// This check runs when a schedule is created. Edits to an existing schedule
/// are not re-checked by the system, so a row in `existing` whose id matches
/// `candidate.id` is compared like any other row — callers re-submitting an
/// edited schedule through this function will see it conflict with itself.
pub fn has_overlap(candidate: &WeeklySchedule, existing: &[WeeklySchedule]) -> bool {
    !find_overlaps(candidate, existing).is_empty()
}
