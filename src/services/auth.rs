use std::sync::Arc;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::issue_token;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::UserRepository;
use crate::domain::user::{Email, Role, User};

/// Outcome of a successful register or login
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub token: String,
    pub user_id: Uuid,
    pub email: Email,
    pub roles: Vec<Role>,
}

/// Account registration and login
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt_secret: String,
    jwt_ttl_secs: i64,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        jwt_secret: String,
        jwt_ttl_secs: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            jwt_secret,
            jwt_ttl_secs,
            bcrypt_cost,
        }
    }

    /// Registers a new account with the default {EMPLOYEE} role set
    ///
    /// Duplicate emails are reported as a validation failure (400), matching
    /// the register contract rather than the generic conflict mapping.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<AuthOutcome> {
        let email = Email::new(email).map_err(DomainError::Validation)?;

        if password.len() < 8 {
            return Err(DomainError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "First name and last name are required".to_string(),
            ));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(DomainError::Validation(
                "Email already registered".to_string(),
            ));
        }

        let password_hash = hash_password(password, self.bcrypt_cost)?;
        let roles = vec![Role::Employee];
        let user = User {
            id: Uuid::new_v4(),
            email: email.clone(),
            password_hash,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            roles: roles.clone(),
        };

        let user_id = self.users.create(user).await?;
        let token = self.issue(&email, &roles)?;

        tracing::info!(%user_id, "user registered");

        Ok(AuthOutcome {
            token,
            user_id,
            email,
            roles,
        })
    }

    /// Logs a user in, returning a fresh token
    ///
    /// Unknown email and wrong password both fail with `BadCredentials` so
    /// responses never reveal whether an account exists.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthOutcome> {
        let email = Email::new(email).map_err(|_| DomainError::BadCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::BadCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(DomainError::BadCredentials);
        }

        let token = self.issue(&user.email, &user.roles)?;

        Ok(AuthOutcome {
            token,
            user_id: user.id,
            email: user.email,
            roles: user.roles,
        })
    }

    fn issue(&self, email: &Email, roles: &[Role]) -> DomainResult<String> {
        issue_token(email.as_str(), roles, &self.jwt_secret, self.jwt_ttl_secs)
            .map_err(|e| DomainError::Internal(format!("Failed to create token: {}", e)))
    }
}
