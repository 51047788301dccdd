use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{corrupt, map_db_err};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::SalaryRepository;
use crate::domain::salary::{Salary, SalaryStatus, YearMonth};

/// PostgreSQL implementation of SalaryRepository
///
/// `month` is stored as the first day of the month in a DATE column and
/// reconstructed into [`YearMonth`] on read.
pub struct PostgresSalaryRepository {
    pool: PgPool,
}

impl PostgresSalaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str =
    "id, employee_id, base_salary, bonus, deductions, net_salary, month, status, comments";

fn row_to_salary(row: PgRow) -> DomainResult<Salary> {
    let month: NaiveDate = row.try_get("month").map_err(map_db_err)?;
    let status: String = row.try_get("status").map_err(map_db_err)?;
    Ok(Salary {
        id: row.try_get("id").map_err(map_db_err)?,
        employee_id: row.try_get("employee_id").map_err(map_db_err)?,
        base_salary: row.try_get("base_salary").map_err(map_db_err)?,
        bonus: row.try_get("bonus").map_err(map_db_err)?,
        deductions: row.try_get("deductions").map_err(map_db_err)?,
        net_salary: row.try_get("net_salary").map_err(map_db_err)?,
        month: YearMonth::from_date(month),
        status: status
            .parse::<SalaryStatus>()
            .map_err(|e| corrupt("salary status", e))?,
        comments: row.try_get("comments").map_err(map_db_err)?,
    })
}

#[async_trait]
impl SalaryRepository for PostgresSalaryRepository {
    async fn create(&self, salary: Salary) -> DomainResult<Uuid> {
        sqlx::query(
            r#"
            INSERT INTO salaries (id, employee_id, base_salary, bonus, deductions,
                                  net_salary, month, status, comments)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(salary.id)
        .bind(salary.employee_id)
        .bind(salary.base_salary)
        .bind(salary.bonus)
        .bind(salary.deductions)
        .bind(salary.net_salary)
        .bind(salary.month.first_day())
        .bind(salary.status.as_str())
        .bind(&salary.comments)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(salary.id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Salary>> {
        let rows = sqlx::query(&format!("SELECT {} FROM salaries ORDER BY month DESC", COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(row_to_salary).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Salary>> {
        let row = sqlx::query(&format!("SELECT {} FROM salaries WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;

        row.map(row_to_salary).transpose()
    }

    async fn find_by_employee_id(&self, employee_id: Uuid) -> DomainResult<Vec<Salary>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM salaries WHERE employee_id = $1 ORDER BY month DESC",
            COLUMNS
        ))
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(row_to_salary).collect()
    }

    async fn find_by_employee_and_month(
        &self,
        employee_id: Uuid,
        month: YearMonth,
    ) -> DomainResult<Option<Salary>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM salaries WHERE employee_id = $1 AND month = $2",
            COLUMNS
        ))
        .bind(employee_id)
        .bind(month.first_day())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(row_to_salary).transpose()
    }

    async fn find_by_month(&self, month: YearMonth) -> DomainResult<Vec<Salary>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM salaries WHERE month = $1 ORDER BY employee_id",
            COLUMNS
        ))
        .bind(month.first_day())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(row_to_salary).collect()
    }

    async fn update(&self, salary: &Salary) -> DomainResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE salaries
            SET employee_id = $2, base_salary = $3, bonus = $4, deductions = $5,
                net_salary = $6, month = $7, status = $8, comments = $9
            WHERE id = $1
            "#,
        )
        .bind(salary.id)
        .bind(salary.employee_id)
        .bind(salary.base_salary)
        .bind(salary.bonus)
        .bind(salary.deductions)
        .bind(salary.net_salary)
        .bind(salary.month.first_day())
        .bind(salary.status.as_str())
        .bind(&salary.comments)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Salary", salary.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM salaries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Salary", id));
        }
        Ok(())
    }
}
