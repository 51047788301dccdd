use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::principal::Principal;
use crate::auth::token::verify_token;
use crate::domain::user::Email;

/// Authentication extractor for protected routes
///
/// Runs once per request, before the handler body: extracts the bearer
/// token, verifies it, resolves the subject to a user (roles come from the
/// user row, not the token) and the user's optional employee binding.
///
/// A missing or non-Bearer header is 401; a bad token or unknown subject is
/// 403, matching the short-circuit in the authentication pipeline.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(
///     AuthUser(principal): AuthUser,
/// ) -> Result<Json<...>, ApiError> { ... }
/// ```
pub struct AuthUser(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
        })?;

        // token failures collapse into one message; clients learn nothing
        // about which check failed
        let claims =
            verify_token(token, &state.jwt_secret).map_err(|_| ApiError::forbidden("Invalid token"))?;

        let email =
            Email::new(&claims.sub).map_err(|_| ApiError::forbidden("Invalid token"))?;

        let user = state
            .users_repo
            .find_by_email(&email)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::forbidden("Invalid token"))?;

        let employee_id = state
            .employees_repo
            .find_by_user_id(user.id)
            .await
            .map_err(ApiError::from)?
            .map(|employee| employee.id);

        Ok(AuthUser(Principal {
            user_id: user.id,
            email: user.email.as_str().to_string(),
            roles: user.roles,
            employee_id,
        }))
    }
}
