//! Recurrence engine for planner tasks.
//!
//! Turns a task's anchor date and a compact repeat rule (`d <days>` or `y`)
//! into the next date the task falls due. Everything here is pure: no I/O,
//! no shared state, no logging.

pub mod error;
pub mod recurrence;

pub use error::{RuleError, RuleResult};
pub use recurrence::{
    CalendarDate, MAX_DAILY_STEP, MIN_DAILY_STEP, RecurrenceQuery, RecurrenceRule,
    compute_next_date, parse_rule,
};
