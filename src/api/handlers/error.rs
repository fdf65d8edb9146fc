use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Failures a request can end with; the `Display` text is the `error` field sent to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Email already exists")]
    EmailExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid request payload")]
    InvalidPayload,
    #[error("Internal server error")]
    Storage(#[from] sqlx::Error),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::EmailExists | Self::MissingField(_) | Self::InvalidPayload => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(ToSchema, Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Storage(e) = &self {
            error!("Storage error: {:?}", e);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::EmailExists.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::MissingField("email").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Storage(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::EmailExists.to_string(), "Email already exists");
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            ApiError::MissingField("password").to_string(),
            "Missing field: password"
        );
    }

    #[test]
    fn test_storage_error_hides_details() {
        let err = ApiError::Storage(sqlx::Error::Protocol("disk I/O error".to_string()));
        assert_eq!(err.to_string(), "Internal server error");
    }
}
