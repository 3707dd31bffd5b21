//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Client-visible messages mirror the
//! API contract; database and internal details stay in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user with the given email
    #[error("Usuário não encontrado")]
    UserNotFound,

    /// Password mismatch
    #[error("Senha incorreta")]
    InvalidPassword,

    /// Missing, expired or tampered session token
    #[error("Não autenticado")]
    SessionInvalid,

    /// Registration failed; the client only ever sees the generic message
    #[error("Erro ao registrar o usuário")]
    Registration(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),

    /// Token encoding/decoding failure
    #[error("Erro interno do servidor")]
    Token(#[source] jsonwebtoken::errors::Error),

    /// Database error
    #[error("Erro interno do servidor")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Erro interno do servidor")]
    Internal(String),
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // The frontend keys on a 400 for the lookup miss
            AuthError::UserNotFound => StatusCode::BAD_REQUEST,
            AuthError::InvalidPassword | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Registration(_) | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Token(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::BadRequest,
            AuthError::InvalidPassword | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Registration(_) | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Token(_) | AuthError::Database(_) | AuthError::Internal(_) => {
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
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Session token error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Registration(e) => {
                tracing::warn!(error = %e, "User registration failed");
            }
            AuthError::InvalidPassword => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
