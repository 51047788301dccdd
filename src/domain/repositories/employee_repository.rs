use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::employee::Employee;
use crate::domain::error::DomainResult;

/// Repository trait for the Employee aggregate
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persists a new employee; a unique-email violation surfaces as Conflict
    async fn create(&self, employee: Employee) -> DomainResult<Uuid>;

    async fn find_all(&self) -> DomainResult<Vec<Employee>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Employee>>;

    /// Resolves the employee linked to a user account, if any
    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Option<Employee>>;

    /// Replaces every mutable column of an existing employee
    async fn update(&self, employee: &Employee) -> DomainResult<()>;

    /// Deletes an employee; NotFound if no row matches
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
