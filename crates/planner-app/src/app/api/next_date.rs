//! `GET /api/nextdate` - next occurrence of a repeat rule.

use salvo::writing::Text;
use salvo::{Request, Response, Router, handler};

use planner_rules::{CalendarDate, compute_next_date};

use super::NEXT_DATE_ROUTE_COMPONENT;
use super::response::render_error;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Computes the next date for `date` under `repeat`, strictly after `now`.
///
/// Query parameters `now`, `date` and `repeat` are all required. The answer is
/// a bare `YYYYMMDD` string.
///
/// ## Errors
/// Returns HTTP 400 if a parameter is missing, a date is malformed, or the
/// rule is rejected.
#[handler]
#[tracing::instrument(skip_all)]
async fn next_date(req: &mut Request, res: &mut Response) {
    let now = req.query::<String>("now");
    let date = req.query::<String>("date");
    let repeat = req.query::<String>("repeat");

    match resolve(now.as_deref(), date.as_deref(), repeat.as_deref()) {
        Ok(next) => res.render(Text::Plain(next)),
        Err(e) => render_error(res, &e),
    }
}

fn resolve(now: Option<&str>, date: Option<&str>, repeat: Option<&str>) -> AppResult<String> {
    let (Some(now), Some(date), Some(repeat)) = (now, date, repeat) else {
        return Err(AppError::BadRequest(
            "now, date and repeat parameters are required".to_string(),
        ));
    };

    let now = CalendarDate::parse(now)?;
    let next = compute_next_date(now, date, repeat)?;

    tracing::debug!(%now, date, repeat, next, "Next date computed");
    Ok(next)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(NEXT_DATE_ROUTE_COMPONENT).get(next_date)
}
