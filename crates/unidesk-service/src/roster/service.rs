//! Class roster operations.

use std::sync::Arc;

use tracing::info;

use unidesk_core::{AppError, AppResult};
use unidesk_database::repositories::RosterRepository;
use unidesk_entity::roster::{
    ClassWithLeader, LeaderAssignment, MigrationOutcome, RosterStudent, StudentPlacement,
};

use crate::context::RequestContext;

/// Lists classes and students and moves leadership and membership around.
#[derive(Debug, Clone)]
pub struct RosterService {
    roster_repo: Arc<RosterRepository>,
}

impl RosterService {
    /// Creates a new roster service.
    pub fn new(roster_repo: Arc<RosterRepository>) -> Self {
        Self { roster_repo }
    }

    pub async fn list_classes(&self) -> AppResult<Vec<ClassWithLeader>> {
        self.roster_repo.list_classes().await
    }

    pub async fn list_students(&self) -> AppResult<Vec<StudentPlacement>> {
        self.roster_repo.list_placements().await
    }

    /// Roster of one class.
    pub async fn class_students(&self, class_id: i64) -> AppResult<Vec<RosterStudent>> {
        if !self.roster_repo.class_exists(class_id).await? {
            return Err(AppError::not_found("Class not found"));
        }
        self.roster_repo.class_students(class_id).await
    }

    /// Make a student the leader of a class.
    ///
    /// The student does not have to be a member of the class.
    pub async fn change_leader(
        &self,
        ctx: &RequestContext,
        class_id: i64,
        student_id: i64,
    ) -> AppResult<LeaderAssignment> {
        if !self.roster_repo.class_exists(class_id).await? {
            return Err(AppError::not_found("Class not found"));
        }
        if !self.roster_repo.student_exists(student_id).await? {
            return Err(AppError::validation("The selected student is invalid."));
        }

        let assignment = self.roster_repo.upsert_leader(class_id, student_id).await?;
        info!(
            user_id = ctx.user_id,
            class_id,
            student_id,
            "Class leader changed"
        );
        Ok(assignment)
    }

    /// Move a student into another class.
    ///
    /// Every leadership the student held is dropped and not reassigned.
    pub async fn migrate_student(
        &self,
        ctx: &RequestContext,
        student_id: i64,
        new_class_id: i64,
    ) -> AppResult<MigrationOutcome> {
        if !self.roster_repo.student_exists(student_id).await? {
            return Err(AppError::validation("The selected student is invalid."));
        }
        if !self.roster_repo.class_exists(new_class_id).await? {
            return Err(AppError::validation("The selected class is invalid."));
        }

        let outcome = self
            .roster_repo
            .migrate_student(student_id, new_class_id)
            .await
            .map_err(|e| e.into_internal("Failed to migrate student"))?;
        info!(
            user_id = ctx.user_id,
            student_id,
            new_class_id,
            memberships_updated = outcome.memberships_updated,
            leaderships_removed = outcome.leaderships_removed,
            "Student migrated"
        );
        Ok(outcome)
    }
}
