// API layer (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{auth, departments, employees, leave_requests, salaries};
use state::AppState;

/// Builds the full application router; shared between main and the
/// integration tests
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes (no principal required)
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        // Departments
        .route("/api/departments", get(departments::list_departments))
        .route("/api/departments", post(departments::create_department))
        .route("/api/departments/:id", get(departments::get_department))
        .route("/api/departments/:id", put(departments::update_department))
        .route(
            "/api/departments/:id",
            delete(departments::delete_department),
        )
        // Employees
        .route("/api/employees", get(employees::list_employees))
        .route("/api/employees", post(employees::create_employee))
        .route("/api/employees/:id", get(employees::get_employee))
        .route("/api/employees/:id", put(employees::update_employee))
        .route("/api/employees/:id", delete(employees::delete_employee))
        // Leave requests
        .route(
            "/api/leave-requests",
            get(leave_requests::list_leave_requests),
        )
        .route(
            "/api/leave-requests",
            post(leave_requests::create_leave_request),
        )
        .route(
            "/api/leave-requests/my",
            get(leave_requests::list_my_leave_requests),
        )
        .route(
            "/api/leave-requests/:id",
            get(leave_requests::get_leave_request),
        )
        .route(
            "/api/leave-requests/:id",
            put(leave_requests::update_leave_request),
        )
        .route(
            "/api/leave-requests/:id",
            delete(leave_requests::delete_leave_request),
        )
        // Salaries
        .route("/api/salaries", get(salaries::list_salaries))
        .route("/api/salaries", post(salaries::create_salary))
        .route(
            "/api/salaries/employee/:employee_id",
            get(salaries::list_employee_salaries),
        )
        .route(
            "/api/salaries/month/:month/year/:year",
            get(salaries::list_salaries_by_month),
        )
        .route("/api/salaries/:id", get(salaries::get_salary))
        .route("/api/salaries/:id", put(salaries::update_salary))
        .route("/api/salaries/:id", delete(salaries::delete_salary))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
