//! Ticket print-window guard.
//!
//! Decides whether a queue ticket may still be printed relative to a clinic
//! session's end time. The guard fails open: a missing or unparseable end
//! time never blocks a print — the worst case here is over-permissive, not
//! a blocked queue.

use chrono::{NaiveTime, Timelike};
use tracing::warn;

use crate::timeparse;

/// Grace period applied when the configuration store has not supplied one.
pub const DEFAULT_GRACE_MINUTES: u32 = 10;

/// True if a ticket may still be printed at `now` for a session ending at
/// `clinic_end_time` ("HH:MM", same local reference as `now`).
///
/// Printing stays allowed until `grace_minutes` past the end time and is
/// never blocked before the end time. An absent or empty end time means "no
/// restriction"; a malformed one permits the print with a logged warning.
///
/// `grace_minutes` is fetched and refreshed from the configuration store by
/// the caller; this function only applies it.
pub fn is_printable(clinic_end_time: Option<&str>, now: NaiveTime, grace_minutes: u32) -> bool {
    let Some(raw) = clinic_end_time else {
        return true;
    };
    if raw.trim().is_empty() {
        return true;
    }

    let end_minutes = match timeparse::parse_time_strict(raw) {
        Ok(minutes) => minutes,
        Err(err) => {
            warn!(raw, %err, "unparseable clinic end time, permitting print");
            return true;
        }
    };

    let now_minutes = now.hour() * 60 + now.minute();
    let delta = i64::from(now_minutes) - i64::from(end_minutes);
    delta <= i64::from(grace_minutes)
}
