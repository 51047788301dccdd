use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::user::Role;
use crate::services::auth::AuthOutcome;

/// Request body for user registration
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful register or login; never carries hashes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: Uuid,
    pub email: String,
    pub roles: Vec<Role>,
}

impl From<AuthOutcome> for AuthResponse {
    fn from(outcome: AuthOutcome) -> Self {
        Self {
            token: outcome.token,
            user_id: outcome.user_id,
            email: outcome.email.as_str().to_string(),
            roles: outcome.roles,
        }
    }
}

/// Register a new account
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let outcome = state
        .auth
        .register(&req.email, &req.password, &req.first_name, &req.last_name)
        .await?;

    Ok(Json(outcome.into()))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let outcome = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(outcome.into()))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
