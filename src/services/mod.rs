//! Application services: thin orchestration between the navigation stack,
//! the repository traits, and the view models.
pub mod admin;
pub mod assistant;
pub mod case;
pub mod client;
pub mod directory;
pub mod document;
pub mod hearing;
pub mod screen;

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,
    #[error("validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Assistant(#[from] assistant::AssistantError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<crate::forms::FormError> for ServiceError {
    fn from(err: crate::forms::FormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
