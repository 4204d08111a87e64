//! Source of "today" for request handlers.

use salvo::async_trait;

use planner_rules::CalendarDate;

use crate::error::AppResult;

/// Where handlers read the current calendar date from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Local date of the host.
    System,
    /// Always the same date. Used by tests.
    Fixed(CalendarDate),
}

impl Clock {
    /// ## Summary
    /// Returns the current calendar date.
    ///
    /// ## Errors
    /// Returns an error if the host clock is outside the four-digit year range.
    pub fn today(self) -> AppResult<CalendarDate> {
        match self {
            Self::System => Ok(CalendarDate::from_naive(
                chrono::Local::now().date_naive(),
            )?),
            Self::Fixed(date) => Ok(date),
        }
    }
}

pub struct ClockHandler {
    pub clock: Clock,
}

#[async_trait]
impl salvo::Handler for ClockHandler {
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.clock);
    }
}

/// ## Summary
/// Returns today's date using the clock in the depot, or the system clock
/// when none was injected.
///
/// ## Errors
/// See `Clock::today`.
pub fn today_from_depot(depot: &salvo::Depot) -> AppResult<CalendarDate> {
    depot
        .obtain::<Clock>()
        .copied()
        .unwrap_or(Clock::System)
        .today()
}
