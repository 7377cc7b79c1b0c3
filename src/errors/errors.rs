//! Application-wide error system
//!
//! Unified error handling shared by the auth, profile and notification
//! services. Uses `thiserror` together with `actix_web::ResponseError`
//! so every handler can return `Result<HttpResponse, AppError>` and get
//! a consistent JSON error body.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn lookup(repo: &ProfileRepository, id: &str) -> Result<Profile, AppError> {
//!     repo.find_by_user_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure, reported to the client as
/// part of the 400 response body.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Application-wide error type
///
/// Every failure a handler can produce maps to one of these variants,
/// which in turn maps to an HTTP status and JSON body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database failure (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Single-message input validation failure (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// Structured, per-field validation failure (400 Bad Request)
    #[error("Validation failed")]
    ValidationFailed(Vec<FieldError>),

    /// Resource missing (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// Duplicate resource, e.g. an already registered user (400 Bad Request)
    #[error("{0}")]
    Conflict(String),

    /// Missing, malformed or expired credentials (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// Mail relay rejected or timed out (500, with the transport detail
    /// reported in a separate `details` field)
    #[error("Failed to send email")]
    MailError(String),

    /// Failure talking to a collaborating service (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// Anything else (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::ValidationFailed(_)
            | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::ValidationFailed(errors) => serde_json::json!({
                "error": self.to_string(),
                "errors": errors,
            }),
            AppError::MailError(details) => serde_json::json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => serde_json::json!({
                "error": self.to_string(),
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// Flattens `validator`'s nested error map into the field-level list
    /// returned to clients.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();

        // Deterministic ordering for clients and tests
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::ValidationFailed(fields)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

/// Convenience alias for results carrying [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;
    use validator::Validate;

    #[test]
    fn validation_error_maps_to_bad_request() {
        let error = AppError::ValidationError("Message is required".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn conflict_maps_to_bad_request_with_fixed_message() {
        let error = AppError::Conflict("User already exists".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "User already exists");
    }

    #[test]
    fn not_found_maps_to_404() {
        let error = AppError::NotFound("Profile not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn authentication_error_maps_to_401() {
        let error = AppError::AuthenticationError("Invalid credentials".to_string());
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.to_string(), "Invalid credentials");
    }

    #[test]
    fn mail_error_maps_to_500_with_generic_label() {
        let error = AppError::MailError("connection refused".to_string());
        assert_eq!(
            error.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error.to_string(), "Failed to send email");
    }

    #[test]
    fn database_error_maps_to_500() {
        let error = AppError::DatabaseError("pool exhausted".to_string());
        assert_eq!(
            error.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Username is required"))]
        username: String,
        #[validate(email(message = "Email must be valid"))]
        email: String,
    }

    #[test]
    fn validator_errors_become_field_list() {
        let sample = Sample {
            username: String::new(),
            email: "not-an-email".to_string(),
        };

        let err: AppError = sample.validate().unwrap_err().into();
        match err {
            AppError::ValidationFailed(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].field, "email");
                assert_eq!(fields[0].message, "Email must be valid");
                assert_eq!(fields[1].field, "username");
                assert_eq!(fields[1].message, "Username is required");
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }
}
