//! Session token service
//!
//! HMAC-SHA256 signed JWTs carrying the user's id and username with a
//! fixed expiry. The secret and lifetime are held by the instance so the
//! service can be constructed from config at startup and from literals
//! in tests.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::JwtConfig,
    domain::{dto::token::TokenClaims, entities::user::User},
    errors::AppError,
};

pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            expiration_hours,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// Issues a signed session token for a persisted user.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - user has no id yet, or signing fails
    pub fn generate_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("user has no id".to_string()))?,
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| AppError::InternalError(format!("token signing failed: {}", e)))
    }

    /// Verifies signature and expiry and returns the claims.
    ///
    /// All verification failures collapse into the same generic message
    /// so a caller cannot distinguish a bad signature from an expired or
    /// malformed token.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::AuthenticationError("Token is not valid".to_string()))
    }

    /// Strips the `Bearer ` prefix from an authorization header value.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("No token, authorization denied".to_string())
            })
    }
}
