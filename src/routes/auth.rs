use crate::{
    auth::{hash_password, verify_password, LoginRequest, RegisterRequest, TokenResponse},
    error::AppError,
    state::AppState,
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account. A username or email already in use yields a
/// conflict regardless of the other fields.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let password_hash = hash_password(&register_data.password)?;
    state
        .users
        .insert(&register_data.username, &register_data.email, &password_hash)
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User created successfully"
    })))
}

/// Login user
///
/// Verifies the credentials and returns a bearer access token. Unknown
/// username and wrong password get the same response so neither case can be
/// probed.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let user = state.users.find_by_username(&login_data.username).await?;

    match user {
        Some(user) if verify_password(&login_data.password, &user.password_hash) => {
            let token = state.tokens.issue(&user.username)?;
            Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
        }
        _ => Err(AppError::Unauthorized(
            "Incorrect username or password".into(),
        )),
    }
}
