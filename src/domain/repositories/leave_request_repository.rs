use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainResult;
use crate::domain::leave::LeaveRequest;

/// Repository trait for the LeaveRequest aggregate
#[async_trait]
pub trait LeaveRequestRepository: Send + Sync {
    async fn create(&self, request: LeaveRequest) -> DomainResult<Uuid>;

    async fn find_all(&self) -> DomainResult<Vec<LeaveRequest>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<LeaveRequest>>;

    async fn find_by_employee_id(&self, employee_id: Uuid) -> DomainResult<Vec<LeaveRequest>>;

    async fn update(&self, request: &LeaveRequest) -> DomainResult<()>;

    /// Deletes a leave request; NotFound if no row matches
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
