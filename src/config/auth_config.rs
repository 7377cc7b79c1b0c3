//! Authentication configuration
//!
//! JWT signing and password hashing settings for the auth service, and
//! token verification settings for the profile service.
//!
//! # Environment variables
//!
//! ```bash
//! export JWT_SECRET="change-me-in-production"
//! export JWT_EXPIRATION_HOURS="1"
//! export BCRYPT_COST="10"
//! ```

use std::env;

/// JWT session token settings.
///
/// Tokens are HMAC-SHA256 signed and expire after a fixed interval;
/// there is no server-side session store.
pub struct JwtConfig;

impl JwtConfig {
    /// Shared HMAC signing secret.
    ///
    /// Falls back to a development default with a warning; production
    /// deployments must set `JWT_SECRET`.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET is not set, using an insecure development default");
            "your_jwt_secret".to_string()
        })
    }

    /// Token lifetime in hours (default: 1).
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Password hashing settings.
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost factor (default: 10).
    ///
    /// Higher values harden the hash at the expense of login latency.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(10)
    }
}
