//! Donation Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Donation-specific result type alias
pub type DonationResult<T> = Result<T, DonationError>;

/// Donation-specific error variants
#[derive(Debug, Error)]
pub enum DonationError {
    /// Missing, expired or tampered session token
    #[error("Não autenticado")]
    Unauthenticated,

    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),

    /// Creation failed; the client only ever sees the generic message
    #[error("Erro no cadastro da doação")]
    Creation(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Database error
    #[error("Erro interno do servidor")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Erro interno do servidor")]
    Internal(String),
}

impl DonationError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DonationError::Unauthenticated => StatusCode::UNAUTHORIZED,
            DonationError::Validation(_) | DonationError::Creation(_) => StatusCode::BAD_REQUEST,
            DonationError::Database(_) | DonationError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DonationError::Unauthenticated => ErrorKind::Unauthorized,
            DonationError::Validation(_) | DonationError::Creation(_) => ErrorKind::BadRequest,
            DonationError::Database(_) | DonationError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DonationError::Database(e) => {
                tracing::error!(error = %e, "Donation database error");
            }
            DonationError::Internal(msg) => {
                tracing::error!(message = %msg, "Donation internal error");
            }
            DonationError::Creation(e) => {
                tracing::warn!(error = %e, "Donation creation failed");
            }
            _ => {
                tracing::debug!(error = %self, "Donation error");
            }
        }
    }
}

impl IntoResponse for DonationError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for DonationError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            DonationError::Validation(err.message().to_string())
        } else {
            DonationError::Internal(err.to_string())
        }
    }
}
