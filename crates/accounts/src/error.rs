//! Error taxonomy and the single place faults become HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Faults raised by the accounts service.
#[derive(Debug, Error)]
pub enum AccountsError {
    #[error("{resource} not found with the given input data {field}: '{value}'")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{resource} already registered with given {field}: '{value}'")]
    AlreadyExists {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Invalid request: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type alias using AccountsError.
pub type Result<T> = std::result::Result<T, AccountsError>;

impl AccountsError {
    pub fn not_found(
        resource: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            resource,
            field,
            value: value.into(),
        }
    }

    pub fn already_exists(
        resource: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::AlreadyExists {
            resource,
            field,
            value: value.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status this fault translates to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyExists { .. } | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to the caller. Internal detail for 500s
    /// stays in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Migration(_) => {
                "An unexpected error occurred. Please try again or contact Dev team".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Uniform error envelope returned for every fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub path: String,
    pub timestamp: DateTime<Utc>,
}

/// Render a fault raised against the given request path. Every handler
/// funnels its failures through here.
pub fn error_response(path: &str, err: &AccountsError) -> Response {
    let status = err.status();
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("unhandled fault on {}: {}", path, err);
    }
    let body = ErrorResponse {
        status: status.as_u16(),
        message: err.public_message(),
        path: path.to_string(),
        timestamp: Utc::now(),
    };
    (status, Json(body)).into_response()
}
