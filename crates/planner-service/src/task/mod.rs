//! Task service.

mod filter;
mod input;
mod service;

pub use filter::TaskFilter;
pub use input::{NormalizedTask, TaskInput, normalize_task};
pub use service::{
    TaskCompletion, complete_task, create_task, delete_task, get_task, list_tasks, update_task,
};
