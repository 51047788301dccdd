use uuid::Uuid;

use crate::domain::user::Role;

/// The authenticated identity bound to a request
///
/// Built once per request by the authentication extractor and passed
/// explicitly into services; never persisted. Roles come from the user row,
/// not the token, so revoked privileges take effect on the next request.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
    pub roles: Vec<Role>,
    /// Employee record linked to this account, if one exists
    pub employee_id: Option<Uuid>,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.roles.contains(r))
    }
}
