use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::auth::token::Claims;
use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;

/// Resolves the authenticated caller from the claims that `AuthMiddleware`
/// placed into request extensions.
///
/// The subject claim is looked up against the user repository; a miss means
/// the account was deleted (or renamed) after the token was issued, and the
/// request is rejected as unauthenticated. On success the full `User`
/// record is the caller's identity for the rest of the request and the sole
/// authorization boundary for ownership-scoped operations.
pub struct CurrentUser(pub User);

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let claims = claims.ok_or_else(|| {
                // Only reachable if a route using this extractor is not
                // wrapped by AuthMiddleware.
                AppError::Unauthorized("Missing authentication token".to_string())
            })?;
            let state = state.ok_or_else(|| {
                AppError::InternalServerError("Application state not configured".to_string())
            })?;

            match state.users.find_by_username(&claims.sub).await? {
                Some(user) => Ok(CurrentUser(user)),
                None => {
                    log::debug!("token subject {:?} no longer exists", claims.sub);
                    Err(AppError::Unauthorized("Invalid or expired token".to_string()).into())
                }
            }
        })
    }
}
