//! Notification relay request DTO
//!
//! Unlike the auth and profile payloads, the relay validates its fields
//! manually in declaration order and reports only the first failing
//! rule's message, matching the relay's historical behavior.

use serde::Deserialize;
use validator::ValidateEmail;

use crate::errors::AppError;

/// Body of `POST /api/notify`; consumed once, never persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    pub user_id: String,
    pub message: String,
    pub email: String,
}

impl NotifyRequest {
    /// Checks `userId`, `message` and `email` in order and fails with
    /// the first violated rule.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::ValidationError("User ID is required".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(AppError::ValidationError("Message is required".to_string()));
        }
        if !self.normalized_email().validate_email() {
            return Err(AppError::ValidationError("Invalid email".to_string()));
        }
        Ok(())
    }

    /// Message body with surrounding whitespace removed.
    pub fn trimmed_message(&self) -> &str {
        self.message.trim()
    }

    /// Recipient address normalized for dispatch: trimmed and lowercased.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}
