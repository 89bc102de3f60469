//! Class rosters and class leaders.

pub mod service;

pub use service::RosterService;
