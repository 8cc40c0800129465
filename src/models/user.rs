use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user account. The password hash is carried for credential checks but
/// never serialized into responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for updating the authenticated user's profile.
/// The password is optional; when present it is re-validated and re-hashed.
#[derive(Debug, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(
        length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"),
        regex(
            path = "crate::validation::USERNAME_REGEX",
            message = "Username may only contain letters, digits and underscore"
        )
    )]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom = "crate::validation::password_strength")]
    pub password: Option<String>,
}
