// SPDX-License-Identifier: GPL-3.0-only
use axum::extract::rejection::{FormRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::store::StoreError;

pub const CAFE_NOT_FOUND: &str = "Sorry a cafe with that id was not found in the database.";
pub const LOCATION_NOT_FOUND: &str = "Sorry we don't have a cafe at that location.";
pub const NO_CAFES: &str = "Sorry, there are no cafes in the database yet.";
pub const BAD_API_KEY: &str = "Sorry, that's not allowed. Make sure you have the correct api_key.";

/// Every failure a request can end in. Rendered as
/// `{"error": {"<label>": "<message>"}}` with the matching status code.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::DuplicateName(_)) => StatusCode::CONFLICT,
            Self::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Not Found",
            Self::Forbidden(_) => "Forbidden",
            Self::BadRequest(_) => "Bad Request",
            Self::Store(StoreError::DuplicateName(_)) => "Conflict",
            Self::Store(StoreError::Database(_)) => "Internal Server Error",
        }
    }

    /// Message shown to the caller. Database details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::Store(StoreError::DuplicateName(name)) => {
                format!("A cafe named '{}' already exists.", name)
            }
            Self::Store(StoreError::Database(_)) => {
                "Something went wrong on our side. Please try again later.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(StoreError::Database(e)) = &self {
            error!(error = %e, "Store operation failed");
        }

        let status = self.status();
        let body = json!({ "error": { self.label(): self.public_message() } });
        (status, Json(body)).into_response()
    }
}
