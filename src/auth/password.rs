// Password hashing utilities
// bcrypt with a configurable work factor; per-user salt comes with the scheme

use crate::domain::error::{DomainError, DomainResult};

/// Hashes a password with bcrypt at the given cost
pub fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    bcrypt::hash(password, cost)
        .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verifies a password against a stored bcrypt hash
///
/// bcrypt comparison is constant-time with respect to the password; a
/// mismatch and an unknown user must surface as the same error upstream.
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| DomainError::Internal(format!("Password verification failed: {}", e)))
}
