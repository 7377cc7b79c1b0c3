//! Notification service client
//!
//! Outbound HTTP client the auth service uses to ask the notification
//! service for a welcome email. The call is best-effort: the caller
//! spawns it after the user write commits and only ever logs a failure,
//! so registration responses never depend on it.

use reqwest::Client;
use serde_json::json;

use crate::{config::NotifyConfig, errors::AppError};

pub struct NotifyClient {
    client: Client,
    base_url: String,
}

/// Body of the welcome email sent on registration.
pub fn welcome_message(username: &str) -> String {
    format!("Welcome, {}! Your account has been created.", username)
}

impl NotifyClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(NotifyConfig::base_url())
    }

    /// Posts the welcome notification for a freshly registered user.
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - transport failure or a
    ///   non-success status from the notification service
    pub async fn send_welcome(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
    ) -> Result<(), AppError> {
        let url = format!("{}/api/notify", self.base_url.trim_end_matches('/'));

        self.client
            .post(&url)
            .json(&json!({
                "userId": user_id,
                "message": welcome_message(username),
                "email": email,
            }))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;

        Ok(())
    }
}
