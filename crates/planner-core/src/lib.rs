//! Shared configuration, errors and constants for the planner workspace.

pub mod config;
pub mod constants;
pub mod error;
