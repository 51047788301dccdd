use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{corrupt, map_db_err};
use crate::domain::employee::{Employee, EmployeeStatus};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::EmployeeRepository;

/// PostgreSQL implementation of EmployeeRepository
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, first_name, last_name, email, phone, department_id, position, \
                       hire_date, salary, address, status, user_id";

fn row_to_employee(row: PgRow) -> DomainResult<Employee> {
    let status: String = row.try_get("status").map_err(map_db_err)?;
    Ok(Employee {
        id: row.try_get("id").map_err(map_db_err)?,
        first_name: row.try_get("first_name").map_err(map_db_err)?,
        last_name: row.try_get("last_name").map_err(map_db_err)?,
        email: row.try_get("email").map_err(map_db_err)?,
        phone: row.try_get("phone").map_err(map_db_err)?,
        department_id: row.try_get("department_id").map_err(map_db_err)?,
        position: row.try_get("position").map_err(map_db_err)?,
        hire_date: row.try_get("hire_date").map_err(map_db_err)?,
        salary: row.try_get("salary").map_err(map_db_err)?,
        address: row.try_get("address").map_err(map_db_err)?,
        status: status
            .parse::<EmployeeStatus>()
            .map_err(|e| corrupt("employee status", e))?,
        user_id: row.try_get("user_id").map_err(map_db_err)?,
    })
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: Employee) -> DomainResult<Uuid> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, first_name, last_name, email, phone, department_id,
                                   position, hire_date, salary, address, status, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(employee.department_id)
        .bind(&employee.position)
        .bind(employee.hire_date)
        .bind(employee.salary)
        .bind(&employee.address)
        .bind(employee.status.as_str())
        .bind(employee.user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(employee.id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Employee>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM employees ORDER BY last_name, first_name",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(row_to_employee).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>> {
        let row = sqlx::query(&format!("SELECT {} FROM employees WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;

        row.map(row_to_employee).transpose()
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Employee>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM employees WHERE email = $1",
            COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(row_to_employee).transpose()
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Option<Employee>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM employees WHERE user_id = $1",
            COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(row_to_employee).transpose()
    }

    async fn update(&self, employee: &Employee) -> DomainResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4, phone = $5,
                department_id = $6, position = $7, hire_date = $8, salary = $9,
                address = $10, status = $11, user_id = $12
            WHERE id = $1
            "#,
        )
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(employee.department_id)
        .bind(&employee.position)
        .bind(employee.hire_date)
        .bind(employee.salary)
        .bind(&employee.address)
        .bind(employee.status.as_str())
        .bind(employee.user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Employee", employee.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Employee", id));
        }
        Ok(())
    }
}
