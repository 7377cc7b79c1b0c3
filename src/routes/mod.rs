//! Route registration
//!
//! One `configure_*` function per service binary plus the shared health
//! check and CORS setup. The profile routes are the only guarded group;
//! the middleware instance is built by the binary so the token secret is
//! read exactly once.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::services::TokenService;

/// Auth service routes: registration and login, both public.
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login),
    );
}

/// Profile service routes; every `/api/profile` route sits behind the
/// token verification middleware.
pub fn configure_profile_routes(cfg: &mut web::ServiceConfig, token_service: Arc<TokenService>) {
    cfg.service(health_check);
    cfg.service(
        web::scope("/api/profile")
            .wrap(AuthMiddleware::new(token_service))
            .service(handlers::profile::upsert_profile)
            .service(handlers::profile::get_profile)
            .service(handlers::profile::delete_profile),
    );
}

/// Notification service routes: the relay endpoint, public.
pub fn configure_notify_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
    cfg.service(web::scope("/api/notify").service(handlers::notify::notify));
}

/// Liveness endpoint for load balancers and compose health checks.
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// CORS for browser clients on the usual local dev origins.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn health_check_reports_ok() {
        let app = test::init_service(App::new().service(health_check)).await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn guarded_profile_routes_demand_a_token() {
        let token_service = Arc::new(TokenService::new("test-secret".to_string(), 1));
        let app = test::init_service(
            App::new().configure(|cfg| configure_profile_routes(cfg, token_service)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/api/profile/507f1f77bcf86cd799439011")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
