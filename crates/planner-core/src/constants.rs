/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const TASK_ROUTE_COMPONENT: &str = "task";
pub const TASK_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", TASK_ROUTE_COMPONENT);

pub const TASKS_ROUTE_COMPONENT: &str = "tasks";
pub const TASKS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", TASKS_ROUTE_COMPONENT);

pub const NEXT_DATE_ROUTE_COMPONENT: &str = "nextdate";
pub const NEXT_DATE_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", NEXT_DATE_ROUTE_COMPONENT);

/// Storage and wire format of every calendar date (`YYYYMMDD`).
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Format accepted by the task search box (`DD.MM.YYYY`).
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";
