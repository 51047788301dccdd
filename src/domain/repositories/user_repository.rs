use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainResult;
use crate::domain::user::{Email, User};

/// Repository trait for the User aggregate
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user; a unique-email violation surfaces as Conflict
    async fn create(&self, user: User) -> DomainResult<Uuid>;

    /// Finds a user by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Finds a user by email (already normalized by [`Email`])
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
}
