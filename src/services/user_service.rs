//! User account service
//!
//! Registration and credential verification for the auth service.
//! Passwords are bcrypt-hashed with a per-user salt; the plaintext never
//! leaves the request scope and is never logged.

use std::sync::Arc;

use bcrypt::hash;
use log::debug;

use crate::{
    config::PasswordConfig,
    domain::{dto::auth::RegisterRequest, entities::user::User},
    errors::AppError,
    repositories::user_repo::UserStore,
};

pub struct UserService {
    user_store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// Registers a new user.
    ///
    /// A user with the same username *or* email fails with the fixed
    /// "User already exists" message; which field collided is not
    /// reported.
    ///
    /// # Errors
    ///
    /// * `AppError::Conflict` - username or email already taken
    /// * `AppError::InternalError` - password hashing failed
    /// * `AppError::DatabaseError` - lookup or insert failed
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        if self
            .user_store
            .find_by_username_or_email(&request.username, &request.email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("password hashing failed: {}", e)))?;

        let user = self
            .user_store
            .create(User::new(request.username, request.email, password_hash))
            .await?;

        debug!("registered user {}", user.username);

        Ok(user)
    }

    /// Verifies a username/password pair.
    ///
    /// An unknown username and a wrong password produce the identical
    /// "Invalid credentials" failure; callers get no signal about which
    /// one it was.
    pub async fn verify_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = self
            .user_store
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Invalid credentials".to_string()))?;

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("password verification failed: {}", e)))?;

        if !matches {
            return Err(AppError::AuthenticationError(
                "Invalid credentials".to_string(),
            ));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repo::memory::MemoryUserStore;

    fn register_request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    // Low cost keeps the hashing in these tests fast.
    fn stored_user(username: &str, email: &str, password: &str) -> User {
        User::new(
            username.to_string(),
            email.to_string(),
            bcrypt::hash(password, 4).unwrap(),
        )
    }

    #[actix_web::test]
    async fn register_stores_a_hash_not_the_password() {
        let service = UserService::new(Arc::new(MemoryUserStore::default()));

        let user = service
            .register(register_request("alice", "alice@example.com"))
            .await
            .unwrap();

        assert!(user.id.is_some());
        assert_ne!(user.password_hash, "secret1");
        assert!(bcrypt::verify("secret1", &user.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn duplicate_username_is_rejected() {
        let store = MemoryUserStore::with_user(stored_user(
            "alice",
            "alice@example.com",
            "secret1",
        ));
        let service = UserService::new(store);

        let err = service
            .register(register_request("alice", "other@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User already exists");
    }

    #[actix_web::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryUserStore::with_user(stored_user(
            "alice",
            "alice@example.com",
            "secret1",
        ));
        let service = UserService::new(store);

        let err = service
            .register(register_request("someone-else", "alice@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User already exists");
    }

    #[actix_web::test]
    async fn correct_credentials_verify() {
        let store = MemoryUserStore::with_user(stored_user(
            "alice",
            "alice@example.com",
            "secret1",
        ));
        let service = UserService::new(store);

        let user = service.verify_password("alice", "secret1").await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[actix_web::test]
    async fn unknown_user_and_wrong_password_are_indistinguishable() {
        let store = MemoryUserStore::with_user(stored_user(
            "alice",
            "alice@example.com",
            "secret1",
        ));
        let service = UserService::new(store);

        let unknown = service
            .verify_password("nobody", "secret1")
            .await
            .unwrap_err();
        let wrong = service
            .verify_password("alice", "wrong-password")
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), "Invalid credentials");
        assert_eq!(wrong.to_string(), unknown.to_string());
        assert!(matches!(unknown, AppError::AuthenticationError(_)));
        assert!(matches!(wrong, AppError::AuthenticationError(_)));
    }
}
