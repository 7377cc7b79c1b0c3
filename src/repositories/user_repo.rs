//! User repository
//!
//! Data access for the `users` collection. Uniqueness of `username` and
//! `email` is backed by unique indexes created at startup; the duplicate
//! pre-check in [`UserStore::find_by_username_or_email`] exists so
//! registration can answer with the fixed "User already exists" message
//! instead of a bare index violation.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, domain::entities::user::User, errors::AppError};

/// Storage seam for user accounts.
///
/// `UserService` depends on this trait rather than on the MongoDB
/// repository directly, so the registration and login logic can run
/// against an in-memory store in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up a user by username (the canonical login identifier).
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Matches either field; used by the registration duplicate check.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, AppError>;

    /// Inserts a new user and returns it with the assigned id.
    async fn create(&self, user: User) -> Result<User, AppError>;
}

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection("users")
    }

    /// Creates the unique `username` and `email` indexes. Called once at
    /// startup by the auth service binary.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([username_index, email_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = self
            .collection()
            .find_one(doc! { "username": username })
            .await?;

        Ok(user)
    }

    /// Single `$or` query so the duplicate check costs one round trip.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        let user = self
            .collection()
            .find_one(doc! {
                "$or": [
                    { "username": username },
                    { "email": email },
                ]
            })
            .await?;

        Ok(user)
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection().insert_one(&user).await?;

        user.id = result.inserted_id.as_object_id();
        if user.id.is_none() {
            return Err(AppError::DatabaseError(
                "insert did not return an ObjectId".to_string(),
            ));
        }

        Ok(user)
    }
}
