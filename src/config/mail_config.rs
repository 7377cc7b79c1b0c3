//! Mail relay and cross-service notification configuration
//!
//! # Environment variables
//!
//! ```bash
//! # SMTP relay used by the notification service
//! export SMTP_HOST="smtp.example.com"
//! export SMTP_PORT="587"
//! export SMTP_USER="notifications@example.com"
//! export SMTP_PASS="secret"
//!
//! # Where the auth service posts its welcome notifications
//! export NOTIFICATION_SERVICE_URL="http://localhost:3003"
//! ```

use std::env;

/// SMTP relay settings for the notification service.
pub struct SmtpConfig;

impl SmtpConfig {
    /// SMTP relay hostname.
    ///
    /// # Panics
    ///
    /// Panics when `SMTP_HOST` is unset; the notification service cannot
    /// run without a relay.
    pub fn host() -> String {
        env::var("SMTP_HOST").expect("SMTP_HOST must be set")
    }

    /// SMTP relay port (default: 587, STARTTLS).
    pub fn port() -> u16 {
        env::var("SMTP_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(587)
    }

    /// SMTP username; doubles as the fixed sender address.
    pub fn user() -> String {
        env::var("SMTP_USER").expect("SMTP_USER must be set")
    }

    /// SMTP password.
    pub fn password() -> String {
        env::var("SMTP_PASS").expect("SMTP_PASS must be set")
    }
}

/// Location of the notification service, seen from the auth service.
pub struct NotifyConfig;

impl NotifyConfig {
    /// Base URL of the notification service
    /// (default: `http://localhost:3003`).
    pub fn base_url() -> String {
        env::var("NOTIFICATION_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:3003".to_string())
    }
}
