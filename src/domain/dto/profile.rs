//! Profile service request/response DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::profile::Profile;

/// Body of `POST /api/profile` (create-or-update).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    pub bio: Option<String>,
}

impl UpsertProfileRequest {
    /// The supplied bio with surrounding whitespace removed, or `None`
    /// when the field was omitted.
    pub fn trimmed_bio(&self) -> Option<String> {
        self.bio.as_ref().map(|bio| bio.trim().to_string())
    }
}

/// Client-facing profile representation (camelCase JSON).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            bio: profile.bio,
            created_at: profile.created_at.to_chrono().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_are_rejected() {
        let request = UpsertProfileRequest {
            first_name: String::new(),
            last_name: "Smith".to_string(),
            bio: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn bio_is_optional() {
        let request = UpsertProfileRequest {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            bio: None,
        };

        assert!(request.validate().is_ok());
        assert_eq!(request.trimmed_bio(), None);
    }

    #[test]
    fn bio_is_trimmed() {
        let request = UpsertProfileRequest {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            bio: Some("  systems programmer  ".to_string()),
        };

        assert_eq!(request.trimmed_bio().as_deref(), Some("systems programmer"));
    }

    #[test]
    fn request_json_uses_camel_case() {
        let request: UpsertProfileRequest = serde_json::from_str(
            r#"{"firstName": "Alice", "lastName": "Smith", "bio": "hi"}"#,
        )
        .unwrap();

        assert_eq!(request.first_name, "Alice");
        assert_eq!(request.last_name, "Smith");
        assert_eq!(request.bio.as_deref(), Some("hi"));
    }

    #[test]
    fn response_json_uses_camel_case() {
        let profile = Profile::new(
            "507f1f77bcf86cd799439011".to_string(),
            &UpsertProfileRequest {
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
                bio: None,
            },
        );

        let body = serde_json::to_value(ProfileResponse::from(profile)).unwrap();
        assert_eq!(body["userId"], "507f1f77bcf86cd799439011");
        assert_eq!(body["firstName"], "Alice");
        assert!(body.get("bio").is_none());
    }
}
