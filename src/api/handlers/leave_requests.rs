use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::AuthUser;
use crate::api::state::AppState;
use crate::auth::policy::require_any_role;
use crate::domain::leave::{LeaveStatus, LeaveType};
use crate::domain::user::Role;
use crate::services::leave::{LeavePatch, LeaveView};

/// Request body for creating a leave request; the employee is always the
/// caller's own record, never a client-supplied id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub reason: String,
}

/// Patch body for PUT; every field optional, gated per field
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeaveRequest {
    pub status: Option<LeaveStatus>,
    #[serde(rename = "type")]
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub comment: Option<String>,
}

impl From<UpdateLeaveRequest> for LeavePatch {
    fn from(req: UpdateLeaveRequest) -> Self {
        Self {
            status: req.status,
            leave_type: req.leave_type,
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason,
            comment: req.comment,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub status: LeaveStatus,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LeaveView> for LeaveRequestResponse {
    fn from(view: LeaveView) -> Self {
        let r = view.request;
        Self {
            id: r.id,
            employee_id: r.employee_id,
            employee_name: view.employee_name,
            start_date: r.start_date,
            end_date: r.end_date,
            leave_type: r.leave_type,
            status: r.status,
            reason: r.reason,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// GET /api/leave-requests — ADMIN or MANAGER
pub async fn list_leave_requests(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<Json<Vec<LeaveRequestResponse>>, ApiError> {
    require_any_role(&principal, &[Role::Admin, Role::Manager])?;
    let views = state.leaves.list_all().await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// GET /api/leave-requests/my — authenticated, scoped to own employee record
pub async fn list_my_leave_requests(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<Json<Vec<LeaveRequestResponse>>, ApiError> {
    let views = state.leaves.list_mine(&principal).await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// GET /api/leave-requests/:id — authenticated
pub async fn get_leave_request(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LeaveRequestResponse>, ApiError> {
    let view = state.leaves.get(id).await?;
    Ok(Json(view.into()))
}

/// POST /api/leave-requests — authenticated
pub async fn create_leave_request(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(req): Json<CreateLeaveRequest>,
) -> Result<Json<LeaveRequestResponse>, ApiError> {
    let view = state
        .leaves
        .create(
            &principal,
            req.start_date,
            req.end_date,
            req.leave_type,
            &req.reason,
        )
        .await?;
    Ok(Json(view.into()))
}

/// PUT /api/leave-requests/:id — gates depend on the fields in the patch
pub async fn update_leave_request(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateLeaveRequest>,
) -> Result<Json<LeaveRequestResponse>, ApiError> {
    let view = state.leaves.update(&principal, id, req.into()).await?;
    Ok(Json(view.into()))
}

/// DELETE /api/leave-requests/:id — ADMIN or MANAGER, any state
pub async fn delete_leave_request(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_any_role(&principal, &[Role::Admin, Role::Manager])?;
    state.leaves.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
