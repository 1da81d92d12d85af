use thiserror::Error;

use crate::repository::RepositoryError;

pub mod categories;
pub mod charms;
pub mod discounts;
pub mod pricing;
pub mod products;

/// Result type returned by every service operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested entity does not exist.
    #[error("not found")]
    NotFound,
    /// A submitted payload failed validation or sanitization.
    #[error("invalid payload: {0}")]
    Form(String),
    /// The persistence layer failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
