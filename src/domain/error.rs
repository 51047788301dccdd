use thiserror::Error;

/// Domain error taxonomy shared by all services
///
/// Services raise kinds; the API layer owns the mapping to HTTP status
/// codes. Handlers never catch these.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input failed validation (missing/ill-formed fields, bad ranges)
    #[error("{0}")]
    Validation(String),

    /// The referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness or state-machine violation
    #[error("{0}")]
    Conflict(String),

    /// Login failed; deliberately identical for unknown user and wrong password
    #[error("Invalid credentials")]
    BadCredentials,

    /// No principal is bound to the request
    #[error("{0}")]
    Unauthenticated(String),

    /// A principal is present but not allowed to perform the operation
    #[error("{0}")]
    Forbidden(String),

    /// Unanticipated failure; detail is logged, not returned to clients
    #[error("{0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Shorthand for NotFound with an entity name and id
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} not found with id: {}", entity, id))
    }
}
