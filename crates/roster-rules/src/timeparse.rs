//! Clock-time parsing shared by the rules.
//!
//! Schedule records carry times of day as strings, in either 24-hour "HH:MM"
//! or 12-hour "HH:MM AM/PM" form depending on which admin page wrote them.
//! Both forms normalize to integer minutes since midnight (0–1439).

use tracing::warn;

use crate::error::{Result, RuleError};

enum Meridiem {
    Am,
    Pm,
}

/// Parse a clock-time string into minutes since midnight.
///
/// Accepts 24-hour "HH:MM" and 12-hour "HH:MM AM"/"HH:MM PM". In 12-hour
/// form, "12:xx AM" is just past midnight and "12:xx PM" just past noon.
///
/// Malformed input yields 0 with a logged warning. Schedule data comes from
/// an external store, and one bad row must not abort rule evaluation — the
/// caller's rendering flow keeps going on a fail-open default.
pub fn parse_time(raw: &str) -> u32 {
    match parse_time_strict(raw) {
        Ok(minutes) => minutes,
        Err(err) => {
            warn!(raw, %err, "unparseable clock time, treating as midnight");
            0
        }
    }
}

/// Parse a clock-time string, rejecting malformed input.
///
/// Same grammar as [`parse_time`]. Used where the caller wants to surface the
/// problem instead of degrading: candidate validation before an overlap
/// check, and the print guard's explicit fail-open branch.
///
/// # Errors
/// Returns [`RuleError::InvalidClockTime`] when the string is not a valid
/// time of day in either accepted form.
pub fn parse_time_strict(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();

    // Split an optional 12-hour suffix off the "HH:MM" part.
    let (clock, meridiem) = match trimmed.rsplit_once(' ') {
        Some((clock, suffix)) if suffix.eq_ignore_ascii_case("am") => (clock, Some(Meridiem::Am)),
        Some((clock, suffix)) if suffix.eq_ignore_ascii_case("pm") => (clock, Some(Meridiem::Pm)),
        _ => (trimmed, None),
    };

    let (hour_raw, minute_raw) = clock
        .split_once(':')
        .ok_or_else(|| RuleError::InvalidClockTime(raw.to_string()))?;

    let hour: u32 = hour_raw
        .trim()
        .parse()
        .map_err(|_| RuleError::InvalidClockTime(raw.to_string()))?;
    let minute: u32 = minute_raw
        .trim()
        .parse()
        .map_err(|_| RuleError::InvalidClockTime(raw.to_string()))?;

    let hour = match meridiem {
        // 12-hour clock: hour 12 means the first hour of the half-day.
        Some(Meridiem::Am) if hour == 12 => 0,
        Some(Meridiem::Pm) if hour == 12 => 12,
        Some(Meridiem::Pm) => hour + 12,
        _ => hour,
    };

    if hour >= 24 || minute >= 60 {
        return Err(RuleError::InvalidClockTime(raw.to_string()));
    }

    Ok(hour * 60 + minute)
}
