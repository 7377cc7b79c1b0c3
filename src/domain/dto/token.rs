//! Session token claims

use serde::{Deserialize, Serialize};

/// Claims embedded in the HS256 session token.
///
/// Validity is purely cryptographic plus expiry; there is no server-side
/// session state to revoke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id (hex ObjectId string).
    pub sub: String,
    pub username: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}
