use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainResult;
use crate::domain::salary::{Salary, YearMonth};

/// Repository trait for the Salary aggregate
#[async_trait]
pub trait SalaryRepository: Send + Sync {
    /// Persists a new salary record; an `(employee_id, month)` collision
    /// surfaces as Conflict
    async fn create(&self, salary: Salary) -> DomainResult<Uuid>;

    async fn find_all(&self) -> DomainResult<Vec<Salary>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Salary>>;

    async fn find_by_employee_id(&self, employee_id: Uuid) -> DomainResult<Vec<Salary>>;

    async fn find_by_employee_and_month(
        &self,
        employee_id: Uuid,
        month: YearMonth,
    ) -> DomainResult<Option<Salary>>;

    async fn find_by_month(&self, month: YearMonth) -> DomainResult<Vec<Salary>>;

    async fn update(&self, salary: &Salary) -> DomainResult<()>;

    /// Deletes a salary record; NotFound if no row matches
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
