use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::department::Department;
use crate::domain::error::DomainResult;

/// Repository trait for the Department aggregate
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Persists a new department; a unique-name violation surfaces as Conflict
    async fn create(&self, department: Department) -> DomainResult<Uuid>;

    async fn find_all(&self) -> DomainResult<Vec<Department>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Department>>;

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Department>>;

    async fn update(&self, department: &Department) -> DomainResult<()>;

    /// Deletes a department; NotFound if no row matches. The employee
    /// guard is enforced by the service before this is called.
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Number of employees currently assigned to the department
    async fn count_employees(&self, id: Uuid) -> DomainResult<i64>;
}
