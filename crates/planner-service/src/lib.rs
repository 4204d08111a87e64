//! Task operations: validation, normalisation and persistence.

pub mod error;
pub mod task;
