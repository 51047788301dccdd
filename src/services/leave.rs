use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::policy::{is_current_employee, require_any_role};
use crate::auth::principal::Principal;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::domain::repositories::{EmployeeRepository, LeaveRequestRepository};
use crate::domain::user::Role;

/// Roles that may approve/reject requests and leave manager comments
const REVIEWER_ROLES: [Role; 2] = [Role::Admin, Role::Manager];

/// Fields a PUT may carry; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct LeavePatch {
    pub status: Option<LeaveStatus>,
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
    /// Manager feedback, appended to the reason rather than stored apart
    pub comment: Option<String>,
}

impl LeavePatch {
    fn edits_fields(&self) -> bool {
        self.leave_type.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.reason.is_some()
    }

    fn is_empty(&self) -> bool {
        !self.edits_fields() && self.status.is_none() && self.comment.is_none()
    }
}

/// Leave request together with the owning employee's display name
#[derive(Debug, Clone)]
pub struct LeaveView {
    pub request: LeaveRequest,
    pub employee_name: String,
}

/// Leave-request lifecycle
///
/// Create forces PENDING; updates are gated per field and checked in full
/// before any write, so a request that fails one gate changes nothing.
pub struct LeaveService {
    leave_requests: Arc<dyn LeaveRequestRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl LeaveService {
    pub fn new(
        leave_requests: Arc<dyn LeaveRequestRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            leave_requests,
            employees,
        }
    }

    pub async fn list_all(&self) -> DomainResult<Vec<LeaveView>> {
        let mut views = Vec::new();
        for request in self.leave_requests.find_all().await? {
            views.push(self.with_employee(request).await?);
        }
        Ok(views)
    }

    /// Lists requests belonging to the principal's employee record
    pub async fn list_mine(&self, principal: &Principal) -> DomainResult<Vec<LeaveView>> {
        let employee_id = self.require_employee_binding(principal)?;
        let mut views = Vec::new();
        for request in self.leave_requests.find_by_employee_id(employee_id).await? {
            views.push(self.with_employee(request).await?);
        }
        Ok(views)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<LeaveView> {
        let request = self
            .leave_requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Leave request", id))?;
        self.with_employee(request).await
    }

    /// Creates a PENDING request for the principal's own employee record
    pub async fn create(
        &self,
        principal: &Principal,
        start_date: NaiveDate,
        end_date: NaiveDate,
        leave_type: LeaveType,
        reason: &str,
    ) -> DomainResult<LeaveView> {
        let employee_id = self.require_employee_binding(principal)?;

        if reason.trim().is_empty() {
            return Err(DomainError::Validation("Reason is required".to_string()));
        }
        if end_date < start_date {
            return Err(DomainError::Validation(
                "End date must not be before start date".to_string(),
            ));
        }
        let today = Utc::now().date_naive();
        if start_date <= today {
            return Err(DomainError::Validation(
                "Start date must be in the future".to_string(),
            ));
        }

        let now = Utc::now();
        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id,
            start_date,
            end_date,
            leave_type,
            status: LeaveStatus::Pending,
            reason: reason.trim().to_string(),
            created_at: now,
            updated_at: now,
        };
        let id = self.leave_requests.create(request).await?;
        self.get(id).await
    }

    /// Applies a patch, enforcing the per-field gate split
    ///
    /// All applicable gates are evaluated before anything is written; a
    /// single failing gate rejects the whole update.
    pub async fn update(
        &self,
        principal: &Principal,
        id: Uuid,
        patch: LeavePatch,
    ) -> DomainResult<LeaveView> {
        if patch.is_empty() {
            return Err(DomainError::Validation(
                "Update contains no fields".to_string(),
            ));
        }

        let mut request = self
            .leave_requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Leave request", id))?;

        check_update_gates(principal, &request, &patch)?;

        if let Some(leave_type) = patch.leave_type {
            request.leave_type = leave_type;
        }
        if let Some(start_date) = patch.start_date {
            request.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            request.end_date = end_date;
        }
        if request.end_date < request.start_date {
            return Err(DomainError::Validation(
                "End date must not be before start date".to_string(),
            ));
        }
        if let Some(reason) = patch.reason {
            request.reason = reason;
        }
        if let Some(comment) = patch.comment {
            request.reason = format!("{}\nManager's comment: {}", request.reason, comment);
        }
        if let Some(status) = patch.status {
            request.status = status;
        }
        request.updated_at = Utc::now();

        self.leave_requests.update(&request).await?;
        self.with_employee(request).await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.leave_requests.delete(id).await
    }

    fn require_employee_binding(&self, principal: &Principal) -> DomainResult<Uuid> {
        principal.employee_id.ok_or_else(|| {
            DomainError::Validation("No employee profile linked to the current user".to_string())
        })
    }

    async fn with_employee(&self, request: LeaveRequest) -> DomainResult<LeaveView> {
        let employee_name = self
            .employees
            .find_by_id(request.employee_id)
            .await?
            .map(|e| e.full_name())
            .unwrap_or_default();
        Ok(LeaveView {
            request,
            employee_name,
        })
    }
}

/// Gate evaluation for a leave-request patch, separated from the write path
///
/// - status -> APPROVED/REJECTED: reviewer roles only
/// - status -> CANCELLED: owning employee only
/// - any non-status field: owner, and only while the request is PENDING
/// - comment: reviewer roles (manager feedback)
///
/// Invalid transitions (anything out of a terminal state) are conflicts
/// naming the current state.
fn check_update_gates(
    principal: &Principal,
    request: &LeaveRequest,
    patch: &LeavePatch,
) -> DomainResult<()> {
    if let Some(next) = patch.status {
        if next == LeaveStatus::Cancelled {
            if !is_current_employee(principal, request.employee_id) {
                return Err(DomainError::Forbidden(
                    "Only the requesting employee may cancel a leave request".to_string(),
                ));
            }
        } else {
            require_any_role(principal, &REVIEWER_ROLES)?;
        }
        if next != request.status && !request.status.can_transition_to(next) {
            return Err(DomainError::Conflict(format!(
                "Cannot change status of a {} leave request",
                request.status
            )));
        }
    }

    if patch.comment.is_some() {
        require_any_role(principal, &REVIEWER_ROLES)?;
    }

    if patch.edits_fields() {
        if !is_current_employee(principal, request.employee_id) {
            return Err(DomainError::Forbidden(
                "Only the requesting employee may edit a leave request".to_string(),
            ));
        }
        if request.status != LeaveStatus::Pending {
            return Err(DomainError::Conflict(format!(
                "Cannot edit a {} leave request",
                request.status
            )));
        }
    }

    Ok(())
}
