//! Shared test harness: in-memory repositories behind the domain traits and
//! helpers for driving the real router with `tower::ServiceExt::oneshot`.
//!
//! The whole suite runs without Postgres; the storage-level uniqueness
//! constraints are emulated by the fakes.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower::util::ServiceExt;
use uuid::Uuid;

use staff_manager_api::api::{self, state::AppState};
use staff_manager_api::auth::password::hash_password;
use staff_manager_api::config::AppConfig;
use staff_manager_api::domain::department::Department;
use staff_manager_api::domain::employee::{Employee, EmployeeStatus};
use staff_manager_api::domain::error::{DomainError, DomainResult};
use staff_manager_api::domain::leave::LeaveRequest;
use staff_manager_api::domain::repositories::{
    DepartmentRepository, EmployeeRepository, LeaveRequestRepository, SalaryRepository,
    UserRepository,
};
use staff_manager_api::domain::salary::{Salary, YearMonth};
use staff_manager_api::domain::user::{Email, Role, User};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_BCRYPT_COST: u32 = 4;

// ===== In-memory repositories =====

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> DomainResult<Uuid> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict("Resource already exists".to_string()));
        }
        let id = user.id;
        rows.push(user);
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: Mutex<Vec<Employee>>,
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: Employee) -> DomainResult<Uuid> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|e| e.email == employee.email) {
            return Err(DomainError::Conflict("Resource already exists".to_string()));
        }
        let id = employee.id;
        rows.push(employee);
        Ok(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Employee>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Employee>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Option<Employee>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.user_id == Some(user_id))
            .cloned())
    }

    async fn update(&self, employee: &Employee) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|e| e.id == employee.id) {
            Some(row) => {
                *row = employee.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Employee", employee.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found("Employee", id));
        }
        Ok(())
    }
}

/// Counts assignments against the shared employee store so the delete
/// guard sees employees created through the API
pub struct InMemoryDepartmentRepository {
    rows: Mutex<Vec<Department>>,
    employees: Arc<InMemoryEmployeeRepository>,
}

impl InMemoryDepartmentRepository {
    pub fn new(employees: Arc<InMemoryEmployeeRepository>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            employees,
        }
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn create(&self, department: Department) -> DomainResult<Uuid> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|d| d.name == department.name) {
            return Err(DomainError::Conflict("Resource already exists".to_string()));
        }
        let id = department.id;
        rows.push(department);
        Ok(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Department>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Department>> {
        Ok(self.rows.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Department>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.name == name)
            .cloned())
    }

    async fn update(&self, department: &Department) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|d| d.id == department.id) {
            Some(row) => {
                *row = department.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Department", department.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| d.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found("Department", id));
        }
        Ok(())
    }

    async fn count_employees(&self, id: Uuid) -> DomainResult<i64> {
        Ok(self
            .employees
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.department_id == id)
            .count() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryLeaveRequestRepository {
    rows: Mutex<Vec<LeaveRequest>>,
}

#[async_trait]
impl LeaveRequestRepository for InMemoryLeaveRequestRepository {
    async fn create(&self, request: LeaveRequest) -> DomainResult<Uuid> {
        let id = request.id;
        self.rows.lock().unwrap().push(request);
        Ok(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<LeaveRequest>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<LeaveRequest>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_employee_id(&self, employee_id: Uuid) -> DomainResult<Vec<LeaveRequest>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn update(&self, request: &LeaveRequest) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == request.id) {
            Some(row) => {
                *row = request.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Leave request", request.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found("Leave request", id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySalaryRepository {
    rows: Mutex<Vec<Salary>>,
}

#[async_trait]
impl SalaryRepository for InMemorySalaryRepository {
    async fn create(&self, salary: Salary) -> DomainResult<Uuid> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|s| s.employee_id == salary.employee_id && s.month == salary.month)
        {
            return Err(DomainError::Conflict("Resource already exists".to_string()));
        }
        let id = salary.id;
        rows.push(salary);
        Ok(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Salary>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Salary>> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_employee_id(&self, employee_id: Uuid) -> DomainResult<Vec<Salary>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn find_by_employee_and_month(
        &self,
        employee_id: Uuid,
        month: YearMonth,
    ) -> DomainResult<Option<Salary>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.employee_id == employee_id && s.month == month)
            .cloned())
    }

    async fn find_by_month(&self, month: YearMonth) -> DomainResult<Vec<Salary>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.month == month)
            .cloned()
            .collect())
    }

    async fn update(&self, salary: &Salary) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|s| s.id == salary.id) {
            Some(row) => {
                *row = salary.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Salary", salary.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found("Salary", id));
        }
        Ok(())
    }
}

// ===== Application setup =====

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub employees: Arc<InMemoryEmployeeRepository>,
    pub departments: Arc<InMemoryDepartmentRepository>,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgresql://unused".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_ttl_secs: 3600,
        bcrypt_cost: TEST_BCRYPT_COST,
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
    }
}

/// Builds the real router over fresh in-memory repositories
pub fn setup_app() -> TestApp {
    let users = Arc::new(InMemoryUserRepository::default());
    let employees = Arc::new(InMemoryEmployeeRepository::default());
    let departments = Arc::new(InMemoryDepartmentRepository::new(employees.clone()));
    let leave_requests = Arc::new(InMemoryLeaveRequestRepository::default());
    let salaries = Arc::new(InMemorySalaryRepository::default());

    let state = AppState::new(
        &test_config(),
        users.clone(),
        employees.clone(),
        departments.clone(),
        leave_requests,
        salaries,
    );

    TestApp {
        router: api::router(state),
        users,
        employees,
        departments,
    }
}

// ===== Seeding helpers =====

/// Inserts a user directly and returns its id; password is "password123"
pub async fn seed_user(app: &TestApp, email: &str, roles: Vec<Role>) -> Uuid {
    let user = User {
        id: Uuid::new_v4(),
        email: Email::new(email).unwrap(),
        password_hash: hash_password("password123", TEST_BCRYPT_COST).unwrap(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        roles,
    };
    app.users.create(user).await.unwrap()
}

pub async fn seed_department(app: &TestApp, name: &str) -> Uuid {
    app.departments
        .create(Department {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
        })
        .await
        .unwrap()
}

/// Inserts an employee, optionally linked to a user account
pub async fn seed_employee(
    app: &TestApp,
    email: &str,
    department_id: Uuid,
    user_id: Option<Uuid>,
) -> Uuid {
    let employee = Employee {
        id: Uuid::new_v4(),
        first_name: "Emp".to_string(),
        last_name: "Loyee".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        department_id,
        position: "Engineer".to_string(),
        hire_date: Utc::now().date_naive(),
        salary: "1000.00".parse().unwrap(),
        address: "1 Main St".to_string(),
        status: EmployeeStatus::Active,
        user_id,
    };
    app.employees.create(employee).await.unwrap()
}

/// Logs in through the API and returns the bearer token
pub async fn login(app: &TestApp, email: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({ "email": email, "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

// ===== HTTP helpers =====

/// Sends one request through the router and returns (status, parsed body)
pub async fn request(
    app: &TestApp,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).to_string(),
        ))
    };

    (status, value)
}
