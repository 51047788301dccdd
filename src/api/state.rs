use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::repositories::{
    DepartmentRepository, EmployeeRepository, LeaveRequestRepository, SalaryRepository,
    UserRepository,
};
use crate::services::{
    AuthService, DepartmentService, EmployeeService, LeaveService, SalaryService,
};

/// Shared application state: services plus what the authentication
/// extractor needs to resolve a principal
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub departments: Arc<DepartmentService>,
    pub employees: Arc<EmployeeService>,
    pub leaves: Arc<LeaveService>,
    pub salaries: Arc<SalaryService>,
    /// Principal resolution: subject -> user row (roles re-read per request)
    pub users_repo: Arc<dyn UserRepository>,
    /// Principal resolution: user -> optional employee binding
    pub employees_repo: Arc<dyn EmployeeRepository>,
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        users: Arc<dyn UserRepository>,
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
        leave_requests: Arc<dyn LeaveRequestRepository>,
        salaries: Arc<dyn SalaryRepository>,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(
                users.clone(),
                config.jwt_secret.clone(),
                config.jwt_ttl_secs,
                config.bcrypt_cost,
            )),
            departments: Arc::new(DepartmentService::new(departments.clone())),
            employees: Arc::new(EmployeeService::new(employees.clone(), departments)),
            leaves: Arc::new(LeaveService::new(leave_requests, employees.clone())),
            salaries: Arc::new(SalaryService::new(salaries, employees.clone())),
            users_repo: users,
            employees_repo: employees,
            jwt_secret: config.jwt_secret.clone(),
        }
    }
}
