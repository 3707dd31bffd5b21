//! Login Use Case
//!
//! Email lookup, password verification and session issuance. Lookup
//! miss and password mismatch are reported with distinct messages and
//! statuses, matching the API contract.

use std::sync::Arc;

use tracing::info;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword, UserId};
use crate::error::{AuthError, AuthResult};

/// Login input
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub senha: String,
}

/// Successful login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R> {
    repository: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub fn new(repository: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repository, config }
    }

    /// Authenticate and issue a session token
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A malformed email cannot match any stored account
        let email = Email::new(&input.email).map_err(|_| AuthError::UserNotFound)?;

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let raw = RawPassword::new(input.senha).map_err(|_| AuthError::InvalidPassword)?;
        if !user.password.verify(&raw, self.config.pepper()) {
            return Err(AuthError::InvalidPassword);
        }

        let token = session_token::issue(user.id, &self.config)?;

        info!(user_id = user.id.as_i64(), "User logged in");

        Ok(LoginOutput {
            user_id: user.id,
            token,
        })
    }
}
