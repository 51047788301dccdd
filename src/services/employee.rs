use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::employee::{Employee, EmployeeStatus};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::{DepartmentRepository, EmployeeRepository};

/// Full employee shape accepted on create and update (update is a full
/// replace, matching the API contract)
#[derive(Debug, Clone)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department_id: Uuid,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    pub address: String,
    pub status: EmployeeStatus,
    pub user_id: Option<Uuid>,
}

/// Employee together with its resolved department name
#[derive(Debug, Clone)]
pub struct EmployeeView {
    pub employee: Employee,
    pub department_name: String,
}

pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentRepository>,
}

impl EmployeeService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            employees,
            departments,
        }
    }

    pub async fn list(&self) -> DomainResult<Vec<EmployeeView>> {
        let mut views = Vec::new();
        for employee in self.employees.find_all().await? {
            views.push(self.with_department(employee).await?);
        }
        Ok(views)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<EmployeeView> {
        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee", id))?;
        self.with_department(employee).await
    }

    pub async fn create(&self, input: EmployeeInput) -> DomainResult<EmployeeView> {
        self.validate(&input)?;
        self.require_department(input.department_id).await?;

        if self.employees.find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }

        let employee = Employee {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            department_id: input.department_id,
            position: input.position,
            hire_date: input.hire_date,
            salary: input.salary,
            address: input.address,
            status: input.status,
            user_id: input.user_id,
        };
        let id = self.employees.create(employee).await?;
        self.get(id).await
    }

    pub async fn update(&self, id: Uuid, input: EmployeeInput) -> DomainResult<EmployeeView> {
        let mut employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee", id))?;

        self.validate(&input)?;
        self.require_department(input.department_id).await?;

        // re-check uniqueness only when the email changes
        if employee.email != input.email
            && self.employees.find_by_email(&input.email).await?.is_some()
        {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }

        employee.first_name = input.first_name;
        employee.last_name = input.last_name;
        employee.email = input.email;
        employee.phone = input.phone;
        employee.department_id = input.department_id;
        employee.position = input.position;
        employee.hire_date = input.hire_date;
        employee.salary = input.salary;
        employee.address = input.address;
        employee.status = input.status;
        employee.user_id = input.user_id;

        self.employees.update(&employee).await?;
        self.with_department(employee).await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.employees.delete(id).await
    }

    fn validate(&self, input: &EmployeeInput) -> DomainResult<()> {
        let mut missing = Vec::new();
        if input.first_name.trim().is_empty() {
            missing.push("firstName");
        }
        if input.last_name.trim().is_empty() {
            missing.push("lastName");
        }
        if !input.email.contains('@') {
            missing.push("email");
        }
        if input.phone.trim().is_empty() {
            missing.push("phone");
        }
        if input.position.trim().is_empty() {
            missing.push("position");
        }
        if input.address.trim().is_empty() {
            missing.push("address");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "Missing or invalid fields: {}",
                missing.join(", ")
            )))
        }
    }

    async fn require_department(&self, department_id: Uuid) -> DomainResult<()> {
        self.departments
            .find_by_id(department_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Department", department_id))
    }

    async fn with_department(&self, employee: Employee) -> DomainResult<EmployeeView> {
        let department_name = self
            .departments
            .find_by_id(employee.department_id)
            .await?
            .map(|d| d.name)
            .unwrap_or_default();
        Ok(EmployeeView {
            employee,
            department_name,
        })
    }
}
