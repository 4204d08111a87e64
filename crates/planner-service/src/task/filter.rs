use chrono::NaiveDate;

use planner_core::constants::SEARCH_DATE_FORMAT;
use planner_rules::CalendarDate;

/// How the task list is narrowed down by the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    /// Search text was a `DD.MM.YYYY` date.
    OnDate(CalendarDate),
    /// Substring of the title or comment.
    Text(String),
}

impl TaskFilter {
    #[must_use]
    pub fn from_search(search: Option<&str>) -> Self {
        let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::All;
        };

        NaiveDate::parse_from_str(search, SEARCH_DATE_FORMAT)
            .ok()
            .and_then(|date| CalendarDate::from_naive(date).ok())
            .map_or_else(|| Self::Text(search.to_string()), Self::OnDate)
    }
}
