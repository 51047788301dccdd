use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::AuthUser;
use crate::api::state::AppState;
use crate::auth::policy::require_any_role;
use crate::domain::user::Role;
use crate::services::department::DepartmentView;

/// Request body for creating or updating a department
#[derive(Debug, Deserialize)]
pub struct DepartmentRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub employee_count: i64,
}

impl From<DepartmentView> for DepartmentResponse {
    fn from(view: DepartmentView) -> Self {
        Self {
            id: view.department.id,
            name: view.department.name,
            description: view.department.description,
            employee_count: view.employee_count,
        }
    }
}

/// GET /api/departments — any authenticated user
pub async fn list_departments(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let views = state.departments.list().await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// GET /api/departments/:id — ADMIN or MANAGER
pub async fn get_department(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    require_any_role(&principal, &[Role::Admin, Role::Manager])?;
    let view = state.departments.get(id).await?;
    Ok(Json(view.into()))
}

/// POST /api/departments — ADMIN
pub async fn create_department(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(req): Json<DepartmentRequest>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    let view = state.departments.create(&req.name, req.description).await?;
    Ok(Json(view.into()))
}

/// PUT /api/departments/:id — ADMIN
pub async fn update_department(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<DepartmentRequest>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    let view = state
        .departments
        .update(id, &req.name, req.description)
        .await?;
    Ok(Json(view.into()))
}

/// DELETE /api/departments/:id — ADMIN; refused while employees are assigned
pub async fn delete_department(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    state.departments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
