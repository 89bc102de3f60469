//! Classes, memberships and class leaders.

pub mod model;

pub use model::{ClassWithLeader, LeaderAssignment, MigrationOutcome, RosterStudent, StudentPlacement};
