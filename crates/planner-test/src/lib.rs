//! Planner task server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can reach every layer
//! through one dependency.

pub use planner_app as app;
pub use planner_core as core;
pub use planner_db as db;
pub use planner_rules as rules;
pub use planner_service as service;
