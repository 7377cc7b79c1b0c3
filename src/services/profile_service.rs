//! Profile service business logic
//!
//! Upsert, read and delete for per-user profiles. The upsert merge rule
//! itself lives on the entity (`Profile::apply_update`); this service
//! sequences the lookup and the write.

use std::sync::Arc;

use crate::{
    domain::{dto::profile::UpsertProfileRequest, entities::profile::Profile},
    errors::AppError,
    repositories::profile_repo::ProfileRepository,
};

/// Whether an upsert created a new profile (201) or updated an existing
/// one (200).
pub enum UpsertOutcome {
    Created(Profile),
    Updated(Profile),
}

pub struct ProfileService {
    profile_repo: Arc<ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    /// Create-or-update for the authenticated caller's profile.
    ///
    /// Names are always overwritten; `bio` only when supplied;
    /// `created_at` is immutable.
    pub async fn upsert(
        &self,
        user_id: &str,
        request: &UpsertProfileRequest,
    ) -> Result<UpsertOutcome, AppError> {
        match self.profile_repo.find_by_user_id(user_id).await? {
            Some(mut existing) => {
                existing.apply_update(request);
                let stored = self
                    .profile_repo
                    .update(&existing)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;
                Ok(UpsertOutcome::Updated(stored))
            }
            None => {
                let created = self
                    .profile_repo
                    .create(Profile::new(user_id.to_string(), request))
                    .await?;
                Ok(UpsertOutcome::Created(created))
            }
        }
    }

    /// Profile lookup by the path-supplied user id.
    pub async fn get(&self, user_id: &str) -> Result<Profile, AppError> {
        self.profile_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Deletes by the path-supplied user id.
    pub async fn delete(&self, user_id: &str) -> Result<(), AppError> {
        if !self.profile_repo.delete_by_user_id(user_id).await? {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }
        Ok(())
    }
}
