// Bearer token creation and verification
// HS256 only; the verifier pins the algorithm and allows no expiry leeway

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::user::Role;

/// Signed token payload
///
/// `sub` carries the user's email; roles travel in the token for
/// introspection but authorization always re-reads them from the user row.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Role names granted at issue time
    pub roles: Vec<Role>,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Why a presented token was rejected
///
/// All three collapse into a single unauthenticated outcome at the HTTP
/// boundary so clients learn nothing about which check failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,
    #[error("Invalid token signature")]
    SignatureInvalid,
    #[error("Token expired")]
    Expired,
}

/// Creates a signed bearer token for a user
///
/// # Arguments
/// * `email` - Subject of the token
/// * `roles` - Role set granted at issue time
/// * `secret` - HS256 signing secret (from configuration)
/// * `ttl_secs` - Lifetime; expiry is `now + ttl_secs`, strict
pub fn issue_token(
    email: &str,
    roles: &[Role],
    secret: &str,
    ttl_secs: i64,
) -> Result<String, TokenError> {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        roles: roles.to_vec(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|_| TokenError::Malformed)
}

/// Verifies a bearer token and returns its claims
///
/// Rejects tokens that are malformed, tampered with, expired, or whose
/// header advertises any algorithm other than HS256 (algorithm-confusion
/// tokens fail before signature checking).
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::ImmatureSignature => TokenError::SignatureInvalid,
            _ => TokenError::Malformed,
        }
    })
}
