//! User entity
//!
//! The identity record owned by the auth service. Created on
//! registration, read on login, never updated or deleted in this system.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// `username` and `email` are unique across the collection (enforced by
/// indexes created at startup). The password is held only as a bcrypt
/// hash; handlers must never serialize this entity to clients directly,
/// responses go through `UserResponse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            email,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    /// Hex string form of the assigned ObjectId, if persisted.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
