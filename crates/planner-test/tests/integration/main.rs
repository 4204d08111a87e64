//! HTTP integration tests for the planner server.

mod helpers;

mod task;
mod tasks;
