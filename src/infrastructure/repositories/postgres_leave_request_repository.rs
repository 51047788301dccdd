use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{corrupt, map_db_err};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::domain::repositories::LeaveRequestRepository;

/// PostgreSQL implementation of LeaveRequestRepository
pub struct PostgresLeaveRequestRepository {
    pool: PgPool,
}

impl PostgresLeaveRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str =
    "id, employee_id, start_date, end_date, leave_type, status, reason, created_at, updated_at";

fn row_to_leave_request(row: PgRow) -> DomainResult<LeaveRequest> {
    let leave_type: String = row.try_get("leave_type").map_err(map_db_err)?;
    let status: String = row.try_get("status").map_err(map_db_err)?;
    Ok(LeaveRequest {
        id: row.try_get("id").map_err(map_db_err)?,
        employee_id: row.try_get("employee_id").map_err(map_db_err)?,
        start_date: row.try_get("start_date").map_err(map_db_err)?,
        end_date: row.try_get("end_date").map_err(map_db_err)?,
        leave_type: leave_type
            .parse::<LeaveType>()
            .map_err(|e| corrupt("leave type", e))?,
        status: status
            .parse::<LeaveStatus>()
            .map_err(|e| corrupt("leave status", e))?,
        reason: row.try_get("reason").map_err(map_db_err)?,
        created_at: row.try_get("created_at").map_err(map_db_err)?,
        updated_at: row.try_get("updated_at").map_err(map_db_err)?,
    })
}

#[async_trait]
impl LeaveRequestRepository for PostgresLeaveRequestRepository {
    async fn create(&self, request: LeaveRequest) -> DomainResult<Uuid> {
        sqlx::query(
            r#"
            INSERT INTO leave_requests (id, employee_id, start_date, end_date, leave_type,
                                        status, reason, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(request.id)
        .bind(request.employee_id)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.leave_type.as_str())
        .bind(request.status.as_str())
        .bind(&request.reason)
        .bind(request.created_at)
        .bind(request.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(request.id)
    }

    async fn find_all(&self) -> DomainResult<Vec<LeaveRequest>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM leave_requests ORDER BY created_at DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(row_to_leave_request).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<LeaveRequest>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM leave_requests WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(row_to_leave_request).transpose()
    }

    async fn find_by_employee_id(&self, employee_id: Uuid) -> DomainResult<Vec<LeaveRequest>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM leave_requests WHERE employee_id = $1 ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(row_to_leave_request).collect()
    }

    async fn update(&self, request: &LeaveRequest) -> DomainResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE leave_requests
            SET start_date = $2, end_date = $3, leave_type = $4, status = $5,
                reason = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(request.id)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.leave_type.as_str())
        .bind(request.status.as_str())
        .bind(&request.reason)
        .bind(request.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Leave request", request.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM leave_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Leave request", id));
        }
        Ok(())
    }
}
