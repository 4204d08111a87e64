//! Repeat rule grammar.
//!
//! ```text
//! rule  := "d" " " days | "y" [ " " any ]
//! days  := base-10 integer in 1..=400
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{RuleError, RuleResult};

pub const MIN_DAILY_STEP: u32 = 1;
pub const MAX_DAILY_STEP: u32 = 400;

/// A validated repeat rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    /// Every `step` days.
    Daily(u32),
    /// Every calendar year on the same month and day.
    Yearly,
}

impl RecurrenceRule {
    /// Applies one step of the rule, or `None` past year 9999.
    #[must_use]
    pub fn advance(self, date: super::CalendarDate) -> Option<super::CalendarDate> {
        match self {
            Self::Daily(step) => date.add_days(step),
            Self::Yearly => date.add_year(),
        }
    }
}

/// ## Summary
/// Parses repeat rule text into a `RecurrenceRule`.
///
/// Tokens are separated by single spaces, so doubled spaces yield empty
/// tokens and change the token count.
///
/// ## Errors
/// - `MissingRule` for an empty string
/// - `MalformedRule` for a token count other than one or two, or a daily rule
///   whose step is absent or not an integer
/// - `StepOutOfRange` for a daily step outside `1..=400`
/// - `UnsupportedRule` for any leading token other than `d` or `y`
pub fn parse_rule(text: &str) -> RuleResult<RecurrenceRule> {
    if text.is_empty() {
        return Err(RuleError::MissingRule);
    }

    let tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() > 2 {
        return Err(RuleError::MalformedRule(text.to_string()));
    }

    match tokens.as_slice() {
        ["d"] => Err(RuleError::MalformedRule(text.to_string())),
        ["d", days] => {
            let days: i64 = days
                .parse()
                .map_err(|_err| RuleError::MalformedRule(text.to_string()))?;
            let step = u32::try_from(days)
                .ok()
                .filter(|step| (MIN_DAILY_STEP..=MAX_DAILY_STEP).contains(step))
                .ok_or(RuleError::StepOutOfRange(days))?;
            Ok(RecurrenceRule::Daily(step))
        }
        ["y"] | ["y", _] => Ok(RecurrenceRule::Yearly),
        _ => Err(RuleError::UnsupportedRule(text.to_string())),
    }
}

impl FromStr for RecurrenceRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily(step) => write!(f, "d {step}"),
            Self::Yearly => f.write_str("y"),
        }
    }
}
