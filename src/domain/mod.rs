//! Domain layer: persistent entities, request/response DTOs and the
//! token claims shared between the auth and profile services.

pub mod auth;
pub mod dto;
pub mod entities;

pub use auth::AuthenticatedUser;
pub use dto::auth::{LoginRequest, RegisterRequest, RegisterResponse, UserResponse};
pub use dto::notify::NotifyRequest;
pub use dto::profile::{ProfileResponse, UpsertProfileRequest};
pub use dto::token::TokenClaims;
pub use entities::profile::Profile;
pub use entities::user::User;
