//! API error types rendered as response envelopes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use employee_core::{Envelope, EnvelopeErrors, FieldErrors};
use employee_store::StoreError;

/// Name used in messages for store-level not-found errors.
const STORE_RESOURCE: &str = "Employee";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Payload failed validation (400).
    #[error("{message}: {errors}")]
    Validation {
        message: String,
        errors: FieldErrors,
    },

    /// The addressed record does not exist (404).
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// No route matches the request path (404).
    #[error("no route for {0}")]
    UnknownRoute(String),

    /// The path exists but not for this method (405).
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Validation failure on create.
    pub fn creation_failed(resource: &str, errors: FieldErrors) -> Self {
        Self::Validation {
            message: format!("{} creation failed", resource),
            errors,
        }
    }

    /// Validation failure on update.
    pub fn update_failed(resource: &str, errors: FieldErrors) -> Self {
        Self::Validation {
            message: format!("{} update failed", resource),
            errors,
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::UnknownRoute(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                StoreError::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// The envelope `message` for this error.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Store(StoreError::EmployeeNotFound(_)) => format!("{} not found", STORE_RESOURCE),
            Self::UnknownRoute(_) => "Not found".to_string(),
            Self::MethodNotAllowed(_) => "Method not allowed".to_string(),
            Self::Internal(_) | Self::Store(_) => "Internal server error".to_string(),
        }
    }

    /// The envelope `errors` for this error.
    pub fn errors(&self) -> EnvelopeErrors {
        match self {
            Self::Validation { errors, .. } => EnvelopeErrors::Fields(errors.clone()),
            Self::NotFound { resource } => {
                EnvelopeErrors::detail(format!("{} does not exist", resource))
            }
            Self::Store(StoreError::EmployeeNotFound(_)) => {
                EnvelopeErrors::detail(format!("{} does not exist", STORE_RESOURCE))
            }
            Self::UnknownRoute(_) => EnvelopeErrors::detail("Not found."),
            Self::MethodNotAllowed(method) => {
                EnvelopeErrors::detail(format!("Method \"{}\" not allowed.", method))
            }
            Self::Internal(_) | Self::Store(_) => {
                EnvelopeErrors::detail("The server failed to process the request.")
            }
        }
    }

    /// The full error envelope.
    pub fn envelope(&self) -> Envelope<()> {
        Envelope::failure(self.message(), self.status_code().as_u16(), self.errors())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(self.envelope())).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
