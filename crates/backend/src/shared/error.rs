use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use contracts::domain::a001_design::aggregate::DesignError;
use contracts::domain::a002_booking::draft::DraftError;
use contracts::enums::StatusError;

/// Failures of a user action, mapped one-to-one onto HTTP responses.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed user input; the user corrects it and resubmits
    #[error("{0}")]
    Validation(String),

    /// A value outside an enumerated set
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0} not found")]
    NotFound(String),

    /// The backing store failed; surfaced once, never retried
    #[error("Could not save changes, please try again")]
    Persistence(#[source] anyhow::Error),

    /// Missing, malformed or expired access token
    #[error("Authentication required")]
    Unauthorized,

    /// Valid token without the rights the route needs
    #[error("Admin privileges required")]
    Forbidden,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ServiceError {
    pub fn persistence(err: anyhow::Error) -> Self {
        ServiceError::Persistence(err)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation",
            ServiceError::InvalidArgument(_) => "invalid_argument",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Persistence(_) => "persistence",
            ServiceError::Unauthorized => "unauthorized",
            ServiceError::Forbidden => "forbidden",
        }
    }
}

impl From<DraftError> for ServiceError {
    fn from(err: DraftError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<DesignError> for ServiceError {
    fn from(err: DesignError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

/// Request bodies that fail to parse are reported like any other invalid input
impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Validation(rejection.body_text())
    }
}

impl From<StatusError> for ServiceError {
    fn from(err: StatusError) -> Self {
        ServiceError::InvalidArgument(err.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Persistence(source) = &self {
            tracing::error!(error = ?source, "Persistence failure");
        }

        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
