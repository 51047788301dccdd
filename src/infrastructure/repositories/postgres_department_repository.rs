use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::map_db_err;
use crate::domain::department::Department;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::DepartmentRepository;

/// PostgreSQL implementation of DepartmentRepository
pub struct PostgresDepartmentRepository {
    pool: PgPool,
}

impl PostgresDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_department(row: PgRow) -> DomainResult<Department> {
    Ok(Department {
        id: row.try_get("id").map_err(map_db_err)?,
        name: row.try_get("name").map_err(map_db_err)?,
        description: row.try_get("description").map_err(map_db_err)?,
    })
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn create(&self, department: Department) -> DomainResult<Uuid> {
        sqlx::query("INSERT INTO departments (id, name, description) VALUES ($1, $2, $3)")
            .bind(department.id)
            .bind(&department.name)
            .bind(&department.description)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(department.id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Department>> {
        let rows = sqlx::query("SELECT id, name, description FROM departments ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(row_to_department).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Department>> {
        let row = sqlx::query("SELECT id, name, description FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;

        row.map(row_to_department).transpose()
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Department>> {
        let row = sqlx::query("SELECT id, name, description FROM departments WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;

        row.map(row_to_department).transpose()
    }

    async fn update(&self, department: &Department) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE departments SET name = $2, description = $3 WHERE id = $1")
                .bind(department.id)
                .bind(&department.name)
                .bind(&department.description)
                .execute(&self.pool)
                .await
                .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Department", department.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Department", id));
        }
        Ok(())
    }

    async fn count_employees(&self, id: Uuid) -> DomainResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM employees WHERE department_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)?;

        row.try_get("count").map_err(map_db_err)
    }
}
