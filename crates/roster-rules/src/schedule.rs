//! Record types exchanged with the external schedule and physician stores.
//!
//! Fields mirror the backend's JSON wire shape (camelCase keys, lowercase
//! weekday names). References between records are plain opaque id strings;
//! [`PhysicianDirectory`] is the one place a reference is resolved to a full
//! record, so rule code never branches on a "maybe populated" shape.

use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};
use crate::timeparse;

/// Day of the week, Sunday-first, matching how the schedule store records
/// day sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// The lowercase English name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    /// Convert from chrono's weekday.
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl FromStr for Weekday {
    type Err = RuleError;

    /// Case-insensitive parse of an English weekday name.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" => Ok(Weekday::Sunday),
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            _ => Err(RuleError::UnknownWeekday(s.to_string())),
        }
    }
}

/// One recurring assignment of a physician to a weekly day set and a daily
/// time range.
///
/// `start_time`/`end_time` are clock-time strings in either form accepted by
/// [`timeparse::parse_time`]. No overnight wraparound: a valid schedule has
/// `start_time` strictly before `end_time` within one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub id: String,
    pub physician_id: String,
    pub days: BTreeSet<Weekday>,
    /// First calendar date the schedule is effective (inclusive).
    pub start_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

impl WeeklySchedule {
    /// Caller-side validation, run before a candidate reaches the overlap
    /// check. The rule functions themselves assume well-formed records and
    /// degrade fail-open on anything that slips through.
    ///
    /// # Errors
    /// Returns [`RuleError::EmptyDaySet`] for a schedule with no working
    /// days, [`RuleError::InvalidClockTime`] for an unparseable time, and
    /// [`RuleError::InvertedTimeRange`] when the window is empty or reversed.
    pub fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(RuleError::EmptyDaySet);
        }
        let start = timeparse::parse_time_strict(&self.start_time)?;
        let end = timeparse::parse_time_strict(&self.end_time)?;
        if start >= end {
            return Err(RuleError::InvertedTimeRange {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(())
    }

    /// Daily working window as minutes since midnight, fail-open on
    /// malformed times.
    pub(crate) fn minutes_window(&self) -> (u32, u32) {
        (
            timeparse::parse_time(&self.start_time),
            timeparse::parse_time(&self.end_time),
        )
    }
}

/// A nested display-only record (speciality, degree) on a physician listing
/// row. Only the name is ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRecord {
    pub name: String,
}

/// Physician record as returned by the physician-listing endpoint.
///
/// `speciality` and `degree` may or may not be populated depending on the
/// endpoint's populate behavior; both are display enrichment only and never
/// drive control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Physician {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub speciality: Option<NamedRecord>,
    #[serde(default)]
    pub degree: Option<NamedRecord>,
}

/// Physician lookup built once per resolution pass from the listing
/// endpoint's rows.
#[derive(Debug, Clone, Default)]
pub struct PhysicianDirectory {
    by_id: HashMap<String, Physician>,
}

impl PhysicianDirectory {
    pub fn new(physicians: impl IntoIterator<Item = Physician>) -> Self {
        Self {
            by_id: physicians.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Physician> {
        self.by_id.get(id)
    }
}
