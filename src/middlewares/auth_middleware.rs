//! Bearer token verification middleware
//!
//! Wraps every profile route. Verification is purely cryptographic:
//! the middleware checks signature and expiry, attaches the decoded
//! identity to the request extensions and never queries the store.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::token_service::TokenService;

/// Token verification middleware factory.
///
/// The `TokenService` is constructor-injected so the profile binary
/// decides the secret and expiry once at startup.
pub struct AuthMiddleware {
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::AuthenticatedUser;
    use crate::domain::entities::user::User;
    use actix_web::{http::StatusCode, test, web, App, HttpMessage, HttpRequest, HttpResponse};
    use mongodb::bson::oid::ObjectId;

    async fn echo_identity(req: HttpRequest) -> HttpResponse {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => HttpResponse::Ok().json(serde_json::json!({
                "userId": user.user_id,
                "username": user.username,
            })),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-secret".to_string(), 1))
    }

    fn signed_token(service: &TokenService) -> (String, String) {
        let mut user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$10$hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        let token = service.generate_token(&user).unwrap();
        (token, user.id_string().unwrap())
    }

    #[actix_web::test]
    async fn missing_token_is_denied() {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(token_service()))
                .route("/guarded", web::get().to(echo_identity)),
        )
        .await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/guarded").to_request()).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "No token, authorization denied");
    }

    #[actix_web::test]
    async fn malformed_token_is_denied() {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(token_service()))
                .route("/guarded", web::get().to(echo_identity)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Token is not valid");
    }

    #[actix_web::test]
    async fn valid_token_reaches_handler_with_identity() {
        let service = token_service();
        let (token, user_id) = signed_token(&service);

        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(service))
                .route("/guarded", web::get().to(echo_identity)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["userId"], user_id.as_str());
        assert_eq!(body["username"], "alice");
    }
}
