use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::AuthUser;
use crate::api::state::AppState;
use crate::auth::policy::{require_any_role, require_role_or_owner};
use crate::domain::salary::{SalaryStatus, YearMonth};
use crate::domain::user::Role;
use crate::services::salary::{SalaryInput, SalaryView};

/// Request body for creating or updating a salary record
///
/// There is no `netSalary` field: the derived value is recomputed on the
/// server and anything a client sends under that name is dropped during
/// deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRequest {
    pub employee_id: Uuid,
    pub base_salary: Decimal,
    #[serde(default)]
    pub bonus: Decimal,
    #[serde(default)]
    pub deductions: Decimal,
    pub month: YearMonth,
    pub status: Option<SalaryStatus>,
    pub comments: Option<String>,
}

impl From<SalaryRequest> for SalaryInput {
    fn from(req: SalaryRequest) -> Self {
        Self {
            employee_id: req.employee_id,
            base_salary: req.base_salary,
            bonus: req.bonus,
            deductions: req.deductions,
            month: req.month,
            status: req.status,
            comments: req.comments,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub deductions: Decimal,
    pub net_salary: Decimal,
    pub month: YearMonth,
    pub year: i32,
    pub status: SalaryStatus,
    pub comments: Option<String>,
}

impl From<SalaryView> for SalaryResponse {
    fn from(view: SalaryView) -> Self {
        let s = view.salary;
        Self {
            id: s.id,
            employee_id: s.employee_id,
            employee_name: view.employee_name,
            base_salary: s.base_salary,
            bonus: s.bonus,
            deductions: s.deductions,
            net_salary: s.net_salary,
            year: s.month.year(),
            month: s.month,
            status: s.status,
            comments: s.comments,
        }
    }
}

/// GET /api/salaries — ADMIN
pub async fn list_salaries(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<Json<Vec<SalaryResponse>>, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    let views = state.salaries.list_all().await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// GET /api/salaries/employee/:employee_id — ADMIN, or the employee itself
pub async fn list_employee_salaries(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<Vec<SalaryResponse>>, ApiError> {
    require_role_or_owner(&principal, &[Role::Admin], employee_id)?;
    let views = state.salaries.list_for_employee(employee_id).await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// GET /api/salaries/:id — ADMIN, or the employee the record belongs to
pub async fn get_salary(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SalaryResponse>, ApiError> {
    let view = state.salaries.get(id).await?;
    require_role_or_owner(&principal, &[Role::Admin], view.salary.employee_id)?;
    Ok(Json(view.into()))
}

/// GET /api/salaries/month/:month/year/:year — ADMIN
pub async fn list_salaries_by_month(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path((month, year)): Path<(u32, i32)>,
) -> Result<Json<Vec<SalaryResponse>>, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    let month = YearMonth::new(year, month).map_err(ApiError::bad_request)?;
    let views = state.salaries.list_by_month(month).await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// POST /api/salaries — ADMIN
pub async fn create_salary(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(req): Json<SalaryRequest>,
) -> Result<Json<SalaryResponse>, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    let view = state.salaries.create(req.into()).await?;
    Ok(Json(view.into()))
}

/// PUT /api/salaries/:id — ADMIN
pub async fn update_salary(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SalaryRequest>,
) -> Result<Json<SalaryResponse>, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    let view = state.salaries.update(id, req.into()).await?;
    Ok(Json(view.into()))
}

/// DELETE /api/salaries/:id — ADMIN
pub async fn delete_salary(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_any_role(&principal, &[Role::Admin])?;
    state.salaries.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
