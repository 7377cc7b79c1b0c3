//! Profile service HTTP handlers
//!
//! All routes sit behind the token verification middleware; the upsert
//! binds to the authenticated caller while read and delete act on the
//! path-supplied user id.

use actix_web::{delete, get, post, web, HttpMessage, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    domain::{auth::AuthenticatedUser, dto::profile::{ProfileResponse, UpsertProfileRequest}},
    errors::AppError,
    services::{ProfileService, UpsertOutcome},
};

/// Identity the middleware stored in the request extensions.
fn caller(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    req.extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| AppError::AuthenticationError("No token, authorization denied".to_string()))
}

/// `POST /api/profile` - create-or-update the caller's profile.
///
/// 201 when a new profile is created, 200 when an existing one is
/// updated.
#[post("")]
pub async fn upsert_profile(
    profile_service: web::Data<ProfileService>,
    req: HttpRequest,
    body: web::Json<UpsertProfileRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let user = caller(&req)?;

    match profile_service.upsert(&user.user_id, &body).await? {
        UpsertOutcome::Created(profile) => {
            Ok(HttpResponse::Created().json(ProfileResponse::from(profile)))
        }
        UpsertOutcome::Updated(profile) => {
            Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
        }
    }
}

/// `GET /api/profile/{user_id}`
#[get("/{user_id}")]
pub async fn get_profile(
    profile_service: web::Data<ProfileService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = profile_service.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

/// `DELETE /api/profile/{user_id}`
#[delete("/{user_id}")]
pub async fn delete_profile(
    profile_service: web::Data<ProfileService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    profile_service.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Profile deleted" })))
}
