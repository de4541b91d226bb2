use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

use crate::api::validation::FieldError;
use crate::db::errors::DbError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Request fields failed validation
    #[error("Validation failed on {} field(s)", .errors.len())]
    Validation { errors: Vec<FieldError> },

    /// Body or path could not be extracted; `status` is the one axum chose
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Storage error, classified
    #[error(transparent)]
    Database(#[from] DbError),

    /// Failure outside the database, e.g. hashing
    #[error("Failed to {operation}")]
    Internal { operation: String },
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Rejected { status, .. } => *status,
            Error::Database(db_err) => match db_err {
                DbError::UniqueViolation { .. } => StatusCode::CONFLICT,
                DbError::NotFound { .. } => StatusCode::NOT_FOUND,
                DbError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            Error::Validation { errors } => json!({ "errors": errors }),
            Error::Rejected { message, .. } => json!({ "error": message }),
            Error::Database(DbError::UniqueViolation { .. }) => json!({ "error": "Email already exists" }),
            Error::Database(DbError::NotFound { .. }) => json!({ "error": "User not found" }),
            Error::Database(DbError::Query { message, sql }) => json!({ "error": message, "sql": sql }),
            Error::Internal { .. } => json!({ "error": "Internal server error" }),
        }
    }
}

macro_rules! from_rejection {
    ($($rejection:ty),+) => {
        $(
            impl From<$rejection> for Error {
                fn from(rejection: $rejection) -> Self {
                    Error::Rejected {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    }
                }
            }
        )+
    };
}

from_rejection!(JsonRejection, FormRejection, PathRejection);

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Database(DbError::Query { sql, .. }) => {
                tracing::error!(sql, "Storage error: {}", self);
            }
            Error::Internal { .. } => {
                tracing::error!("Internal service error: {}", self);
            }
            Error::Database(DbError::UniqueViolation { .. }) => {
                tracing::warn!("Conflict error: {}", self);
            }
            Error::Validation { .. } | Error::Rejected { .. } | Error::Database(DbError::NotFound { .. }) => {
                tracing::debug!("Client error: {}", self);
            }
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}
