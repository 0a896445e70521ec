use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Required fields missing: {0}")]
    MissingRequiredFields(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("User not found with id: {0}")]
    UserNotFound(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl DomainError {
    /// True for errors caused by bad caller input rather than store state.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::ValidationError(_)
                | DomainError::MissingRequiredFields(_)
                | DomainError::InvalidDate(_)
                | DomainError::InvalidDuration(_)
                | DomainError::InvalidLimit(_)
        )
    }
}
