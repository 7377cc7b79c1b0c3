//! Profile entity
//!
//! One profile per user, keyed by the owner's user id (unique index).

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::dto::profile::UpsertProfileRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Hex string form of the owning user's ObjectId; unique.
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Set on creation, never changed by updates.
    pub created_at: DateTime,
}

impl Profile {
    pub fn new(user_id: String, request: &UpsertProfileRequest) -> Self {
        Self {
            id: None,
            user_id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            bio: request.trimmed_bio(),
            created_at: DateTime::now(),
        }
    }

    /// Applies the upsert merge rule: `first_name` and `last_name` are
    /// always overwritten; `bio` is overwritten only when the request
    /// supplied one, otherwise the stored value is kept.
    pub fn apply_update(&mut self, request: &UpsertProfileRequest) {
        self.first_name = request.first_name.clone();
        self.last_name = request.last_name.clone();
        if request.bio.is_some() {
            self.bio = request.trimmed_bio();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(first: &str, last: &str, bio: Option<&str>) -> UpsertProfileRequest {
        UpsertProfileRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            bio: bio.map(|b| b.to_string()),
        }
    }

    #[test]
    fn update_overwrites_names() {
        let mut profile = Profile::new("abc".to_string(), &request("Alice", "Smith", None));
        profile.apply_update(&request("Alicia", "Jones", None));

        assert_eq!(profile.first_name, "Alicia");
        assert_eq!(profile.last_name, "Jones");
    }

    #[test]
    fn update_without_bio_keeps_stored_bio() {
        let mut profile =
            Profile::new("abc".to_string(), &request("Alice", "Smith", Some("hello")));
        profile.apply_update(&request("Alice", "Smith", None));

        assert_eq!(profile.bio.as_deref(), Some("hello"));
    }

    #[test]
    fn update_with_bio_replaces_and_trims() {
        let mut profile =
            Profile::new("abc".to_string(), &request("Alice", "Smith", Some("old")));
        profile.apply_update(&request("Alice", "Smith", Some("  new bio  ")));

        assert_eq!(profile.bio.as_deref(), Some("new bio"));
    }

    #[test]
    fn created_at_survives_updates() {
        let mut profile = Profile::new("abc".to_string(), &request("Alice", "Smith", None));
        let created = profile.created_at;
        profile.apply_update(&request("Alicia", "Smith", Some("bio")));

        assert_eq!(profile.created_at, created);
    }
}
