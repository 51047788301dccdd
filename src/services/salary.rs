use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::{EmployeeRepository, SalaryRepository};
use crate::domain::salary::{compute_net_salary, Salary, SalaryStatus, YearMonth};

/// Salary fields accepted on create and update
///
/// There is deliberately no `net_salary` here: the derived field is
/// server-authoritative and anything a client sends is dropped at the
/// deserialization boundary.
#[derive(Debug, Clone)]
pub struct SalaryInput {
    pub employee_id: Uuid,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub deductions: Decimal,
    pub month: YearMonth,
    pub status: Option<SalaryStatus>,
    pub comments: Option<String>,
}

/// Salary record together with the employee's display name
#[derive(Debug, Clone)]
pub struct SalaryView {
    pub salary: Salary,
    pub employee_name: String,
}

/// Monthly salary records; recomputes the net on every write
pub struct SalaryService {
    salaries: Arc<dyn SalaryRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl SalaryService {
    pub fn new(
        salaries: Arc<dyn SalaryRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            salaries,
            employees,
        }
    }

    pub async fn list_all(&self) -> DomainResult<Vec<SalaryView>> {
        let mut views = Vec::new();
        for salary in self.salaries.find_all().await? {
            views.push(self.with_employee(salary).await?);
        }
        Ok(views)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<SalaryView> {
        let salary = self
            .salaries
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Salary", id))?;
        self.with_employee(salary).await
    }

    pub async fn list_for_employee(&self, employee_id: Uuid) -> DomainResult<Vec<SalaryView>> {
        let mut views = Vec::new();
        for salary in self.salaries.find_by_employee_id(employee_id).await? {
            views.push(self.with_employee(salary).await?);
        }
        Ok(views)
    }

    pub async fn list_by_month(&self, month: YearMonth) -> DomainResult<Vec<SalaryView>> {
        let mut views = Vec::new();
        for salary in self.salaries.find_by_month(month).await? {
            views.push(self.with_employee(salary).await?);
        }
        Ok(views)
    }

    pub async fn create(&self, input: SalaryInput) -> DomainResult<SalaryView> {
        self.require_employee(input.employee_id).await?;

        if self
            .salaries
            .find_by_employee_and_month(input.employee_id, input.month)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "Salary for this employee already exists for {}",
                input.month
            )));
        }

        let salary = Salary {
            id: Uuid::new_v4(),
            employee_id: input.employee_id,
            net_salary: compute_net_salary(input.base_salary, input.bonus, input.deductions),
            base_salary: input.base_salary,
            bonus: input.bonus,
            deductions: input.deductions,
            month: input.month,
            status: input.status.unwrap_or(SalaryStatus::Draft),
            comments: input.comments,
        };
        let id = self.salaries.create(salary).await?;
        self.get(id).await
    }

    pub async fn update(&self, id: Uuid, input: SalaryInput) -> DomainResult<SalaryView> {
        let mut salary = self
            .salaries
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Salary", id))?;

        self.require_employee(input.employee_id).await?;

        // moving to another (employee, month) slot must not collide
        if (salary.employee_id, salary.month) != (input.employee_id, input.month) {
            if let Some(existing) = self
                .salaries
                .find_by_employee_and_month(input.employee_id, input.month)
                .await?
            {
                if existing.id != id {
                    return Err(DomainError::Conflict(format!(
                        "Salary for this employee already exists for {}",
                        input.month
                    )));
                }
            }
        }

        salary.employee_id = input.employee_id;
        salary.base_salary = input.base_salary;
        salary.bonus = input.bonus;
        salary.deductions = input.deductions;
        salary.net_salary = compute_net_salary(input.base_salary, input.bonus, input.deductions);
        salary.month = input.month;
        if let Some(status) = input.status {
            salary.status = status;
        }
        salary.comments = input.comments;

        self.salaries.update(&salary).await?;
        self.with_employee(salary).await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.salaries.delete(id).await
    }

    async fn require_employee(&self, employee_id: Uuid) -> DomainResult<()> {
        self.employees
            .find_by_id(employee_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Employee", employee_id))
    }

    async fn with_employee(&self, salary: Salary) -> DomainResult<SalaryView> {
        let employee_name = self
            .employees
            .find_by_id(salary.employee_id)
            .await?
            .map(|e| e.full_name())
            .unwrap_or_default();
        Ok(SalaryView {
            salary,
            employee_name,
        })
    }
}
