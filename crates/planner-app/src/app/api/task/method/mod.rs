pub mod delete;
pub mod done;
pub mod get;
pub mod post;
pub mod put;
