//! # roster-rules
//!
//! Stateless schedule rules for physician rosters.
//!
//! The engine covers the three decisions the surrounding admin application
//! cannot leave to the backend: rejecting a weekly schedule that would
//! double-book a physician, deriving which schedules are effective on a given
//! calendar date, and deciding whether a queue ticket may still be printed
//! after a clinic session ends.
//!
//! All three rules are pure functions over plain records already fetched by
//! the caller from the external schedule, physician, and configuration
//! stores. The engine performs no I/O and holds no state; fetching, caching,
//! and refresh intervals belong to the caller.
//!
//! ## Modules
//!
//! - [`overlap`] — detect day/time conflicts when a schedule is created
//! - [`today`] — project weekly schedules onto a specific calendar date
//! - [`print_window`] — decide whether a queue ticket may still be printed
//! - [`timeparse`] — clock-time parsing shared by the rules
//! - [`schedule`] — record types exchanged with the schedule store
//! - [`error`] — error types

pub mod error;
pub mod overlap;
pub mod print_window;
pub mod schedule;
pub mod timeparse;
pub mod today;

pub use error::RuleError;
pub use overlap::{find_overlaps, has_overlap, ScheduleOverlap};
pub use print_window::{is_printable, DEFAULT_GRACE_MINUTES};
pub use schedule::{NamedRecord, Physician, PhysicianDirectory, Weekday, WeeklySchedule};
pub use today::{resolve_for_date, TodayScheduleInstance};
