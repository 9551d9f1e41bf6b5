use axum::{http::StatusCode, response::IntoResponse};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The referenced user/course/meeting/address row does not exist.
    #[error("{0}")]
    EntityNotFound(String),
    /// Duplicate enrollment, duplicate meeting slot, duplicate booking.
    #[error("{0}")]
    ResourceConflict(String),
    /// Role mismatch, unverified tutor, or a missing enrollment where one
    /// is required.
    #[error("{0}")]
    ForbiddenOperation(String),
    /// Removal of a relation that does not currently exist
    /// (unenroll without enroll, cancel without booking).
    #[error("{0}")]
    InvalidState(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("transaction failed to commit")]
    TransactionError(#[source] sqlx::Error),
    #[error("database query failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("failed to convert a database row into a domain value: {0}")]
    ConversionEntityError(String),
    #[error("authentication is required")]
    UnauthenticatedError,
    #[error("failed to authorize the operation")]
    UnauthorizedError,
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ResourceConflict(_) => StatusCode::CONFLICT,
            AppError::ForbiddenOperation(_) => StatusCode::FORBIDDEN,
            AppError::InvalidState(_) | AppError::UnprocessableEntity(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::ValidationError(_) | AppError::ConvertToUuidError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedError => StatusCode::FORBIDDEN,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status_code.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_taxonomy_maps_to_expected_status_codes() {
        let cases = [
            (
                AppError::EntityNotFound("x".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::ResourceConflict("x".into()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::ForbiddenOperation("x".into()),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::InvalidState("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::UnauthenticatedError, StatusCode::UNAUTHORIZED),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
