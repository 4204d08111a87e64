use thiserror::Error;

/// Recurrence rule parsing and evaluation errors.
///
/// Every variant is a terminal validation failure: the engine is
/// deterministic, so retrying with the same input reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("repeat rule is not specified")]
    MissingRule,

    #[error("malformed repeat rule: {0:?}")]
    MalformedRule(String),

    #[error("day step must be between 1 and 400, got {0}")]
    StepOutOfRange(i64),

    #[error("unsupported repeat rule: {0:?}")]
    UnsupportedRule(String),

    #[error("invalid date {0:?}, expected YYYYMMDD")]
    InvalidDate(String),

    #[error("next date {candidate} is not after {now}")]
    ResultNotAfterNow { now: String, candidate: String },

    #[error("next date after {0} is beyond year 9999")]
    DateOutOfRange(String),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
