//! HTTP front end of the planner task tracker.

pub mod app;
pub mod clock;
pub mod config;
pub mod db_handler;
pub mod error;
