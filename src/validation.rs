//! Input validators that run before any repository write.
//!
//! Username charset and password strength plug into the `validator` derive
//! on the request DTOs; title and description validators also normalize
//! (trim) and therefore return the cleaned value.

use crate::error::AppError;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

pub const TITLE_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

lazy_static! {
    /// Usernames: letters, digits and underscore only.
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

/// Passwords must be at least 6 characters and contain at least one letter
/// and one digit.
pub fn password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 6 {
        return Err(strength_error("Password must be at least 6 characters"));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(strength_error("Password must contain at least one letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(strength_error("Password must contain at least one digit"));
    }
    Ok(())
}

fn strength_error(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("weak_password");
    error.message = Some(message.into());
    error
}

/// Trims a task title and rejects it if empty or longer than 200 characters
/// after trimming. Returns the trimmed value.
pub fn normalize_title(title: &str) -> Result<String, AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            "Task title cannot be empty".into(),
        ));
    }
    if trimmed.chars().count() > TITLE_MAX_LEN {
        return Err(AppError::ValidationError(format!(
            "Task title must be at most {} characters",
            TITLE_MAX_LEN
        )));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional task description and rejects it if longer than 1000
/// characters. A description that is empty after trimming becomes `None`.
pub fn normalize_description(description: Option<String>) -> Result<Option<String>, AppError> {
    match description {
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.chars().count() > DESCRIPTION_MAX_LEN {
                return Err(AppError::ValidationError(format!(
                    "Task description must be at most {} characters",
                    DESCRIPTION_MAX_LEN
                )));
            }
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        None => Ok(None),
    }
}
