//! Error types for schedule rule evaluation.
//!
//! These cover caller-side validation only. The rule functions themselves
//! never fail: malformed data inside a rule path degrades to a fail-open
//! default with a logged warning instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid clock time: {0:?}")]
    InvalidClockTime(String),

    #[error("Unknown weekday: {0:?}")]
    UnknownWeekday(String),

    #[error("Schedule has an empty day set")]
    EmptyDaySet,

    #[error("Start time {start:?} is not before end time {end:?}")]
    InvertedTimeRange { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, RuleError>;
