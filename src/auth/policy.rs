//! Authorization policy predicates
//!
//! Each gate is a named predicate over the request principal so the
//! authorization matrix stays reviewable in one place instead of being
//! scattered through handlers. Gates return `Forbidden`; the absence of a
//! principal is handled earlier by the authentication extractor.

use uuid::Uuid;

use crate::auth::principal::Principal;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::user::Role;

/// Role gate: passes iff the principal's roles intersect `required`
pub fn require_any_role(principal: &Principal, required: &[Role]) -> DomainResult<()> {
    if principal.has_any_role(required) {
        Ok(())
    } else {
        Err(DomainError::Forbidden(format!(
            "Requires one of roles: {}",
            required
                .iter()
                .map(Role::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

/// Owner gate: passes iff the principal's linked employee is `employee_id`
pub fn is_current_employee(principal: &Principal, employee_id: Uuid) -> bool {
    principal.employee_id == Some(employee_id)
}

/// Disjunction used on per-employee reads: a role from `roles`, or ownership
pub fn require_role_or_owner(
    principal: &Principal,
    roles: &[Role],
    employee_id: Uuid,
) -> DomainResult<()> {
    if principal.has_any_role(roles) || is_current_employee(principal, employee_id) {
        Ok(())
    } else {
        Err(DomainError::Forbidden(
            "Not permitted to access this employee's records".to_string(),
        ))
    }
}
