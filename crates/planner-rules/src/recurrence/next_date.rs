use super::{CalendarDate, RecurrenceRule, parse_rule};
use crate::error::{RuleError, RuleResult};

/// One unit of work for the engine: a reference date, an anchor and a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceQuery {
    pub now: CalendarDate,
    pub anchor: CalendarDate,
    pub rule: RecurrenceRule,
}

impl RecurrenceQuery {
    /// ## Summary
    /// Builds a query from raw anchor and rule text.
    ///
    /// The anchor is parsed before the rule, so a request that is wrong in
    /// both places reports the date.
    ///
    /// ## Errors
    /// Returns `InvalidDate` for a malformed anchor, otherwise any error from
    /// `parse_rule`.
    pub fn parse(now: CalendarDate, anchor_text: &str, rule_text: &str) -> RuleResult<Self> {
        let anchor = CalendarDate::parse(anchor_text)?;
        let rule = parse_rule(rule_text)?;
        Ok(Self { now, anchor, rule })
    }

    /// ## Summary
    /// Returns the earliest date strictly after `now` reachable from the
    /// anchor by one or more whole steps of the rule.
    ///
    /// The anchor itself is never a result: the first candidate is always one
    /// step past it. Steps are applied one at a time because a year is not a
    /// fixed number of days.
    ///
    /// ## Errors
    /// - `DateOutOfRange` if stepping passes year 9999 before overtaking `now`
    /// - `ResultNotAfterNow` if the loop exits without overtaking `now`
    pub fn next_date(&self) -> RuleResult<CalendarDate> {
        let step = |date: CalendarDate| {
            self.rule
                .advance(date)
                .ok_or_else(|| RuleError::DateOutOfRange(date.to_string()))
        };

        let mut candidate = step(self.anchor)?;
        while candidate <= self.now {
            candidate = step(candidate)?;
        }

        if candidate <= self.now {
            return Err(RuleError::ResultNotAfterNow {
                now: self.now.to_string(),
                candidate: candidate.to_string(),
            });
        }

        Ok(candidate)
    }
}

/// ## Summary
/// Computes the next due date for an anchor date and repeat rule, as
/// `YYYYMMDD` text.
///
/// ## Errors
/// See `RecurrenceQuery::parse` and `RecurrenceQuery::next_date`.
pub fn compute_next_date(
    now: CalendarDate,
    anchor_text: &str,
    rule_text: &str,
) -> RuleResult<String> {
    let query = RecurrenceQuery::parse(now, anchor_text, rule_text)?;
    Ok(query.next_date()?.to_string())
}
