pub mod postgres_department_repository;
pub mod postgres_employee_repository;
pub mod postgres_leave_request_repository;
pub mod postgres_salary_repository;
pub mod postgres_user_repository;

pub use postgres_department_repository::PostgresDepartmentRepository;
pub use postgres_employee_repository::PostgresEmployeeRepository;
pub use postgres_leave_request_repository::PostgresLeaveRequestRepository;
pub use postgres_salary_repository::PostgresSalaryRepository;
pub use postgres_user_repository::PostgresUserRepository;

use crate::domain::error::DomainError;

/// Maps a database failure onto the domain taxonomy
///
/// Uniqueness constraints are enforced by the storage layer; violations
/// surface here as Conflict so services can rely on them without racing a
/// pre-check. Everything else is Internal (detail logged, not returned).
pub(crate) fn map_db_err(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return DomainError::Conflict("Resource already exists".to_string());
        }
        if db.is_foreign_key_violation() {
            return DomainError::Conflict("Referenced resource does not exist".to_string());
        }
    }
    DomainError::Internal(format!("Database error: {}", e))
}

/// Maps a corrupt stored value (e.g. unknown enum text) onto Internal
pub(crate) fn corrupt(what: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::Internal(format!("Invalid {} from database: {}", what, err))
}
