use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Unknown user type: {0}")]
    UnknownUserType(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Failed to hash password")]
    PasswordHashing,
}

impl DomainError {
    /// Stable identifier reported to callers alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Repository(_) => "DATABASE_ERROR",
            DomainError::UnknownUserType(_) | DomainError::MissingField(_) => "VALIDATION_ERROR",
            DomainError::PasswordHashing => "INTERNAL_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code() == "VALIDATION_ERROR"
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
