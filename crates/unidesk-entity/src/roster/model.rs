//! Roster projections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A class together with its current leader, if any.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClassWithLeader {
    pub class_id: i64,
    pub class_name: String,
    pub department_id: Option<i64>,
    pub leader_student_id: Option<i64>,
    pub leader_name: Option<String>,
    pub leader_code: Option<String>,
}

/// A student listed in a class roster.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RosterStudent {
    pub student_id: i64,
    pub student_code: String,
    pub name: String,
}

/// A student with the class they are enrolled in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentPlacement {
    pub student_id: i64,
    pub student_code: String,
    pub name: String,
    pub class_id: i64,
}

/// The leader now recorded for a class.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaderAssignment {
    pub class_id: i64,
    pub student_id: i64,
}

/// What a student migration changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationOutcome {
    /// The migrated student.
    pub student_id: i64,
    /// The class the student now belongs to.
    pub new_class_id: i64,
    /// Membership rows moved to the new class.
    pub memberships_updated: u64,
    /// Leader rows removed; the affected classes are left without a leader.
    pub leaderships_removed: u64,
}
