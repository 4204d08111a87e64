use salvo::http::StatusCode;
use thiserror::Error;

use planner_db::error::DbError;
use planner_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] DbError),

    #[error(transparent)]
    RuleError(#[from] planner_rules::RuleError),

    #[error(transparent)]
    CoreError(#[from] planner_core::error::CoreError),

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// ## Summary
    /// Maps the error to the HTTP status the client receives.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_)
            | Self::RuleError(_)
            | Self::ServiceError(ServiceError::RuleError(_) | ServiceError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::ServiceError(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::DatabaseError(DbError::PoolError(_))
            | Self::ServiceError(ServiceError::DatabaseError(DbError::PoolError(_))) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::ServiceError(_) | Self::DatabaseError(_) | Self::CoreError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
