//! SQLite persistence for planner tasks.

pub mod db;
pub mod error;
pub mod model;
