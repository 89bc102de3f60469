//! School and parent record maintenance.

use std::sync::Arc;

use tracing::info;

use unidesk_core::{AppError, AppResult};
use unidesk_database::repositories::{ParentRepository, SchoolRepository};
use unidesk_entity::registry::{Parent, School};

use crate::context::RequestContext;
use crate::{optional, required};

/// CRUD over schools and parents.
#[derive(Debug, Clone)]
pub struct RegistryService {
    school_repo: Arc<SchoolRepository>,
    parent_repo: Arc<ParentRepository>,
}

impl RegistryService {
    /// Creates a new registry service.
    pub fn new(school_repo: Arc<SchoolRepository>, parent_repo: Arc<ParentRepository>) -> Self {
        Self {
            school_repo,
            parent_repo,
        }
    }

    pub async fn list_schools(&self) -> AppResult<Vec<School>> {
        self.school_repo.find_all().await
    }

    /// Create a school. Blank addresses are stored as NULL.
    pub async fn create_school(
        &self,
        ctx: &RequestContext,
        name: &str,
        address: Option<&str>,
    ) -> AppResult<School> {
        let name = required(name, "name")?;
        let address = optional(address);
        if self.school_repo.name_taken(&name, None).await? {
            return Err(AppError::validation("The name has already been taken."));
        }

        let school = self.school_repo.create(&name, address.as_deref()).await?;
        info!(user_id = ctx.user_id, school_id = school.id, "School created");
        Ok(school)
    }

    pub async fn update_school(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: &str,
        address: Option<&str>,
    ) -> AppResult<School> {
        let name = required(name, "name")?;
        let address = optional(address);
        if self.school_repo.name_taken(&name, Some(id)).await? {
            return Err(AppError::validation("The name has already been taken."));
        }

        let school = self
            .school_repo
            .update(id, &name, address.as_deref())
            .await?
            .ok_or_else(|| AppError::not_found("School not found"))?;
        info!(user_id = ctx.user_id, school_id = id, "School updated");
        Ok(school)
    }

    pub async fn delete_school(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.school_repo.delete(id).await? {
            return Err(AppError::not_found("School not found"));
        }
        info!(user_id = ctx.user_id, school_id = id, "School deleted");
        Ok(())
    }

    pub async fn list_parents(&self) -> AppResult<Vec<Parent>> {
        self.parent_repo.find_all().await
    }

    pub async fn create_parent(
        &self,
        ctx: &RequestContext,
        name: &str,
        phone_primary: Option<&str>,
        phone_secondary: Option<&str>,
    ) -> AppResult<Parent> {
        let name = required(name, "name")?;
        let parent = self
            .parent_repo
            .create(
                &name,
                optional(phone_primary).as_deref(),
                optional(phone_secondary).as_deref(),
            )
            .await?;
        info!(user_id = ctx.user_id, parent_id = parent.id, "Parent created");
        Ok(parent)
    }

    pub async fn update_parent(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: &str,
        phone_primary: Option<&str>,
        phone_secondary: Option<&str>,
    ) -> AppResult<Parent> {
        let name = required(name, "name")?;
        let parent = self
            .parent_repo
            .update(
                id,
                &name,
                optional(phone_primary).as_deref(),
                optional(phone_secondary).as_deref(),
            )
            .await?
            .ok_or_else(|| AppError::not_found("Parent not found"))?;
        info!(user_id = ctx.user_id, parent_id = id, "Parent updated");
        Ok(parent)
    }

    /// Delete a parent. Parents still linked to students cannot be deleted.
    pub async fn delete_parent(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.parent_repo.delete(id).await? {
            return Err(AppError::not_found("Parent not found"));
        }
        info!(user_id = ctx.user_id, parent_id = id, "Parent deleted");
        Ok(())
    }
}
