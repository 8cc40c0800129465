use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::error::AppError;
use crate::state::AppState;

/// Bearer-token gate for the protected `/api` scope.
///
/// Skips the registration and login endpoints; everywhere else it requires
/// a valid `Authorization: Bearer <token>` header and rejects the request
/// before any handler (and therefore any storage access) runs. On success
/// the verified claims are placed into request extensions for the
/// `CurrentUser` extractor to resolve.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Registration and login issue credentials; they bypass the gate.
        if req.path().starts_with("/api/auth/login")
            || req.path().starts_with("/api/auth/register")
        {
            return Box::pin(self.service.call(req));
        }

        let tokens = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state.tokens.clone(),
            None => {
                let err = AppError::InternalServerError("Application state not configured".into());
                return Box::pin(async move { Err(err.into()) });
            }
        };

        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);

        match bearer {
            Some(token) => match tokens.verify(&token) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    Box::pin(self.service.call(req))
                }
                Err(reason) => {
                    // The specific reason must not reach the response.
                    log::debug!("rejected bearer token: {}", reason);
                    let err = AppError::Unauthorized("Invalid or expired token".into());
                    Box::pin(async move { Err(err.into()) })
                }
            },
            None => {
                let err = AppError::Unauthorized("Missing authentication token".into());
                Box::pin(async move { Err(err.into()) })
            }
        }
    }
}
