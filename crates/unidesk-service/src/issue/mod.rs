//! Classroom issue lifecycle.

pub mod backlog;
pub mod service;

pub use backlog::plan_backlog;
pub use service::IssueService;
