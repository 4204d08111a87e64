use serde::Deserialize;

use planner_rules::{CalendarDate, RecurrenceQuery, parse_rule};

use crate::error::{ServiceError, ServiceResult};

/// Task fields as submitted by a client. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskInput {
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Task fields ready to store: title present, date valid and not in the past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTask {
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// ## Summary
/// Validates client input and settles the stored due date.
///
/// - empty date → `today`
/// - date before `today`, no repeat → `today`
/// - date before `today`, with repeat → next occurrence after `today`
/// - otherwise the date is kept as given
///
/// A non-empty repeat rule is validated even when the date needs no change.
///
/// ## Errors
/// - `ValidationError` if the title is blank
/// - `RuleError` for an unparseable date or repeat rule
pub fn normalize_task(input: &TaskInput, today: CalendarDate) -> ServiceResult<NormalizedTask> {
    if input.title.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "task title is required".to_string(),
        ));
    }

    let date = if input.date.is_empty() {
        today
    } else {
        CalendarDate::parse(&input.date)?
    };

    let rule = if input.repeat.is_empty() {
        None
    } else {
        Some(parse_rule(&input.repeat)?)
    };

    let date = match rule {
        _ if date >= today => date,
        None => today,
        Some(rule) => RecurrenceQuery {
            now: today,
            anchor: date,
            rule,
        }
        .next_date()?,
    };

    Ok(NormalizedTask {
        date: date.to_string(),
        title: input.title.clone(),
        comment: input.comment.clone(),
        repeat: input.repeat.clone(),
    })
}
