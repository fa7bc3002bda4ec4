use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::activities_service::ActivityError;

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::NotRegistered
            | ActivityError::AlreadySignedUp
            | ActivityError::ActivityFull => StatusCode::BAD_REQUEST,
            ActivityError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Everything a handler can fail with, rendered as `{"detail": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Activity(#[from] ActivityError),

    /// An extractor refused the request (bad path encoding, unparseable query).
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Activity(e) => e.status(),
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorDetail {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
