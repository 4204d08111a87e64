//! Recurrence rule grammar and next-date calculation.

mod date;
mod next_date;
mod rule;

pub use date::CalendarDate;
pub use next_date::{RecurrenceQuery, compute_next_date};
pub use rule::{MAX_DAILY_STEP, MIN_DAILY_STEP, RecurrenceRule, parse_rule};
