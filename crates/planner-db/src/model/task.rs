//! Models for the `scheduler` table.

use diesel::prelude::*;

use crate::db::schema::scheduler;

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = scheduler)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Task {
    pub id: i64,
    /// Next due date, `YYYYMMDD`.
    pub date: String,
    pub title: String,
    pub comment: String,
    /// Repeat rule text; empty for one-off tasks.
    pub repeat: String,
}

/// New task for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = scheduler)]
pub struct NewTask<'a> {
    pub date: &'a str,
    pub title: &'a str,
    pub comment: &'a str,
    pub repeat: &'a str,
}

/// Full replacement of a task's editable fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = scheduler)]
pub struct TaskChangeset<'a> {
    pub date: &'a str,
    pub title: &'a str,
    pub comment: &'a str,
    pub repeat: &'a str,
}
