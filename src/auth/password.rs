use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// One-way hash of a plaintext password. bcrypt embeds the salt and cost
/// parameters in the digest.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Recomputes the digest and compares in constant time (bcrypt does the
/// comparison). Fails closed: a malformed digest yields `false`, never an
/// error that could skip the credential check.
pub fn verify_password(password: &str, digest: &str) -> bool {
    match verify(password, digest) {
        Ok(matches) => matches,
        Err(e) => {
            log::warn!("password verification failed on malformed digest: {}", e);
            false
        }
    }
}
