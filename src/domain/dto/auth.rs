//! Auth service request/response DTOs
//!
//! Explicit schemas per endpoint; validation runs before any handler
//! logic and failures surface as a field-level error list.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::user::User;

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Body of `POST /api/auth/login`.
///
/// The canonical login identifier is the username; email login is not
/// supported.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Client-safe view of a user; never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username,
            email: user.email,
        }
    }
}

/// Body of the 201 registration response.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}
