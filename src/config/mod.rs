//! Service configuration
//!
//! Environment-variable backed configuration, grouped by concern. Each
//! config type is a zero-sized struct with accessor functions so callers
//! never cache stale values and tests can override the environment.
//!
//! All services load a `.env` file at startup (see the binaries) before
//! any of these accessors run.

pub mod auth_config;
pub mod data_config;
pub mod mail_config;

pub use auth_config::{JwtConfig, PasswordConfig};
pub use data_config::DataConfig;
pub use mail_config::{NotifyConfig, SmtpConfig};

use std::env;

/// HTTP listen configuration shared by all three binaries.
pub struct ServerConfig;

impl ServerConfig {
    /// Listen port, read from `PORT` with a per-service default.
    pub fn port(default: u16) -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(default)
    }

    /// Bind address for the HTTP server.
    pub fn bind_address(default_port: u16) -> String {
        format!("0.0.0.0:{}", Self::port(default_port))
    }
}
