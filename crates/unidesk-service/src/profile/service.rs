//! Profile lookup merging account, student and teacher records.

use std::sync::Arc;

use unidesk_core::{AppError, AppResult};
use unidesk_database::repositories::{ProfileRepository, UserRepository};
use unidesk_entity::user::{Profile, ProfileSource};

use crate::context::RequestContext;

/// Builds the profile of the acting user.
#[derive(Debug, Clone)]
pub struct ProfileService {
    user_repo: Arc<UserRepository>,
    profile_repo: Arc<ProfileRepository>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(user_repo: Arc<UserRepository>, profile_repo: Arc<ProfileRepository>) -> Self {
        Self {
            user_repo,
            profile_repo,
        }
    }

    /// Profile of the caller. The full name comes from the linked student
    /// record, then the teacher record, then the account itself.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<Profile> {
        let account = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let mut profile = Profile {
            user_id: account.id,
            username: account.username.clone(),
            role_id: account.role_id,
            role_name: account.role_name,
            access_channel: account.access_channel,
            full_name: account.full_name.unwrap_or(account.username),
            source: ProfileSource::Users,
            teacher_details: None,
        };

        if let Some(name) = self.profile_repo.student_name(account.id).await? {
            profile.full_name = name;
            profile.source = ProfileSource::Students;
        } else if let Some(details) = self.profile_repo.teacher_details(account.id).await? {
            profile.full_name = details.name.clone();
            profile.source = ProfileSource::Teachers;
            profile.teacher_details = Some(details);
        }

        Ok(profile)
    }
}
