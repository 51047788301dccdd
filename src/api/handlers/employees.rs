use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::AuthUser;
use crate::api::state::AppState;
use crate::auth::policy::require_any_role;
use crate::domain::employee::EmployeeStatus;
use crate::domain::user::Role;
use crate::services::employee::{EmployeeInput, EmployeeView};

/// Request body for creating or fully replacing an employee
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
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

impl From<EmployeeRequest> for EmployeeInput {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            department_id: req.department_id,
            position: req.position,
            hire_date: req.hire_date,
            salary: req.salary,
            address: req.address,
            status: req.status,
            user_id: req.user_id,
        }
    }
}

/// Employee response; `full_name` is concatenated at read time and the
/// linked account appears only as its id
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department_id: Uuid,
    pub department_name: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    pub address: String,
    pub status: EmployeeStatus,
    pub user_id: Option<Uuid>,
}

impl From<EmployeeView> for EmployeeResponse {
    fn from(view: EmployeeView) -> Self {
        let e = view.employee;
        Self {
            id: e.id,
            full_name: e.full_name(),
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            phone: e.phone,
            department_id: e.department_id,
            department_name: view.department_name,
            position: e.position,
            hire_date: e.hire_date,
            salary: e.salary,
            address: e.address,
            status: e.status,
            user_id: e.user_id,
        }
    }
}

/// GET /api/employees — ADMIN or MANAGER
pub async fn list_employees(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    require_any_role(&principal, &[Role::Admin, Role::Manager])?;
    let views = state.employees.list().await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// GET /api/employees/:id — ADMIN or MANAGER
pub async fn get_employee(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    require_any_role(&principal, &[Role::Admin, Role::Manager])?;
    let view = state.employees.get(id).await?;
    Ok(Json(view.into()))
}

/// POST /api/employees — ADMIN or HR
pub async fn create_employee(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(req): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    require_any_role(&principal, &[Role::Admin, Role::Hr])?;
    let view = state.employees.create(req.into()).await?;
    Ok(Json(view.into()))
}

/// PUT /api/employees/:id — ADMIN
pub async fn update_employee(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    let view = state.employees.update(id, req.into()).await?;
    Ok(Json(view.into()))
}

/// DELETE /api/employees/:id — ADMIN
pub async fn delete_employee(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
