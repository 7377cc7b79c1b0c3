//! Auth service HTTP handlers
//!
//! Registration and login. Each handler validates the payload, delegates
//! to the account/token services and shapes the JSON response; the
//! welcome notification is spawned after the 201 commit and never blocks
//! or fails the registration.

use actix_web::{post, web, HttpResponse};
use log::error;
use serde_json::json;
use validator::Validate;

use crate::{
    domain::dto::auth::{LoginRequest, RegisterRequest, RegisterResponse, UserResponse},
    errors::AppError,
    services::{NotifyClient, TokenService, UserService},
};

/// `POST /api/auth/register`
///
/// 201 with the created user on success, 400 `"User already exists"`
/// when the username or email is taken.
#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    notify_client: web::Data<NotifyClient>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let user = user_service.register(body.into_inner()).await?;
    let response = UserResponse::from(user);

    // Best effort: the account is already committed, so a notification
    // failure is logged and swallowed.
    {
        let notify_client = notify_client.clone();
        let (user_id, username, email) = (
            response.id.clone(),
            response.username.clone(),
            response.email.clone(),
        );
        actix_web::rt::spawn(async move {
            if let Err(err) = notify_client.send_welcome(&user_id, &username, &email).await {
                error!("welcome notification for {} failed: {}", username, err);
            }
        });
    }

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully".to_string(),
        user: response,
    }))
}

/// `POST /api/auth/login`
///
/// Unknown username and wrong password both answer 401
/// `"Invalid credentials"`.
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let user = user_service
        .verify_password(&body.username, &body.password)
        .await?;

    let token = token_service.generate_token(&user)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Login successful",
        "user": {
            "id": user.id_string().unwrap_or_default(),
            "username": user.username,
        },
        "token": token,
    })))
}
