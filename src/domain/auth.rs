//! Authenticated caller identity
//!
//! Inserted into request extensions by the token verification middleware
//! and read back by the profile handlers.

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Hex string form of the user's ObjectId, taken from the token's
    /// `sub` claim.
    pub user_id: String,
    pub username: String,
}
