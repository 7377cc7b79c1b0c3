//! Profile repository
//!
//! Data access for the `profiles` collection, keyed by the owning
//! user's id (one profile per user, unique index).

use std::sync::Arc;

use mongodb::{
    bson::{doc, serialize_to_bson},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{db::Database, domain::entities::profile::Profile, errors::AppError};

pub struct ProfileRepository {
    db: Arc<Database>,
}

impl ProfileRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Profile> {
        self.db.get_database().collection("profiles")
    }

    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        let profile = self
            .collection()
            .find_one(doc! { "user_id": user_id })
            .await?;

        Ok(profile)
    }

    /// Inserts a new profile and returns it with the assigned id.
    pub async fn create(&self, mut profile: Profile) -> Result<Profile, AppError> {
        let result = self.collection().insert_one(&profile).await?;

        profile.id = result.inserted_id.as_object_id();

        Ok(profile)
    }

    /// Writes back a merged profile (names and bio only; `created_at`
    /// is never touched) and returns the stored document.
    pub async fn update(&self, profile: &Profile) -> Result<Option<Profile>, AppError> {
        let bio = serialize_to_bson(&profile.bio)
            .map_err(|e| AppError::InternalError(format!("bio serialization failed: {}", e)))?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection()
            .find_one_and_update(
                doc! { "user_id": &profile.user_id },
                doc! { "$set": {
                    "first_name": &profile.first_name,
                    "last_name": &profile.last_name,
                    "bio": bio,
                }},
            )
            .with_options(options)
            .await?;

        Ok(updated)
    }

    /// Deletes by owning user id; `false` when nothing matched.
    pub async fn delete_by_user_id(&self, user_id: &str) -> Result<bool, AppError> {
        let result = self
            .collection()
            .delete_one(doc! { "user_id": user_id })
            .await?;

        Ok(result.deleted_count > 0)
    }

    /// Creates the unique `user_id` index. Called once at startup by the
    /// profile service binary.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection().create_indexes([user_id_index]).await?;

        Ok(())
    }
}
