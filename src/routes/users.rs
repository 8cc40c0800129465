use crate::{
    auth::{hash_password, CurrentUser},
    error::AppError,
    models::UserUpdate,
    state::AppState,
};
use actix_web::{delete, get, put, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Returns the authenticated user's profile.
#[get("/me")]
pub async fn me(user: CurrentUser) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(user.0))
}

/// Updates the authenticated user's profile.
///
/// Username and email are replaced; the password only when provided.
/// Renaming the account orphans tokens issued for the old username, since
/// the subject lookup will miss from then on.
#[put("/me")]
pub async fn update_me(
    state: web::Data<AppState>,
    user: CurrentUser,
    user_data: web::Json<UserUpdate>,
) -> Result<impl Responder, AppError> {
    user_data.validate()?;

    let password_hash = match &user_data.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let updated = state
        .users
        .update(
            user.0.id,
            &user_data.username,
            &user_data.email,
            password_hash.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Deletes the authenticated user's account and every task it owns.
///
/// Outstanding tokens for the account are not revoked; they fail from here
/// on because the subject lookup misses.
#[delete("/me")]
pub async fn delete_me(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    state.tasks.delete_by_owner(user.0.id).await?;
    state.users.delete(user.0.id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User deleted successfully"
    })))
}
