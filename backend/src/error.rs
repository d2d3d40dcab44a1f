use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use shared::ProblemDetails;
use thiserror::Error;
use tracing::error;

pub const PROBLEM_JSON: &str = "application/problem+json";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("User {0} not found")]
    UserNotFound(i64),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Problem body for this error. Internal failures keep their cause out of
    /// the response.
    pub fn to_problem(&self) -> ProblemDetails {
        let status = self.status();
        let detail = match self {
            ApiError::Internal(_) => None,
            other => Some(other.to_string()),
        };

        ProblemDetails {
            problem_type: "about:blank".to_string(),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            status: status.as_u16(),
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!("Request failed: {:#}", e);
        }

        let status = self.status();
        (
            status,
            [(header::CONTENT_TYPE, PROBLEM_JSON)],
            Json(self.to_problem()),
        )
            .into_response()
    }
}
