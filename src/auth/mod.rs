pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::CurrentUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenError, TokenService};

/// Payload for a new account registration.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username: 3 to 50 characters, letters, digits and underscore.
    #[validate(
        length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"),
        regex(
            path = "crate::validation::USERNAME_REGEX",
            message = "Username may only contain letters, digits and underscore"
        )
    )]
    pub username: String,
    /// Email address for the new account.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password: at least 6 characters with one letter and one digit.
    #[validate(custom = "crate::validation::password_strength")]
    pub password: String,
}

/// Payload for a login request. Credential format is not validated here;
/// anything that doesn't match a stored credential gets the same uniform
/// unauthenticated response.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response after a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed access token.
    pub access_token: String,
    /// Always "bearer".
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
