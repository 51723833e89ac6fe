use thiserror::Error;

use crate::database::manager::DatabaseError;

pub mod auth_service;
pub mod chiang_rai_service;
pub mod department_service;
pub mod news_service;
pub mod program_service;
pub mod seed_data;
pub mod staff_service;
pub mod upload_service;

/// Error raised by service methods; handlers convert it to an ApiError and
/// the matching HTTP status. No retries, no compensation anywhere.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Pool(#[from] DatabaseError),

    #[error("image processing failed: {0}")]
    Image(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("OAuth failure: {0}")]
    OAuth(String),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ServiceError::BadRequest(message.into())
    }
}
