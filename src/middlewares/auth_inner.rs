use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse},
    http::header::AUTHORIZATION,
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use log::debug;
use serde_json::json;

use crate::domain::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::token_service::TokenService;

pub struct AuthMiddlewareService<S> {
    pub(crate) service: Rc<S>,
    pub(crate) token_service: Arc<TokenService>,
}

impl<S> AuthMiddlewareService<S> {
    /// Reads the `Authorization` header and turns it into a verified
    /// identity. Missing or non-UTF-8 headers map to the missing-token
    /// denial; a present-but-bad token maps to the invalid-token one.
    fn authenticate(&self, req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::AuthenticationError("No token, authorization denied".to_string())
            })?;

        let token = self.token_service.extract_bearer_token(header)?;
        let claims = self.token_service.verify_token(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let authenticated = self.authenticate(&req);

        Box::pin(async move {
            match authenticated {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                }
                Err(err) => {
                    debug!("request to {} rejected: {}", req.path(), err);
                    let response = HttpResponse::Unauthorized()
                        .json(json!({ "error": err.to_string() }));
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}
