//! Session Tokens
//!
//! Stateless signed session tokens (JWT, HS256). A token carries the
//! user id plus issue and expiry timestamps; everything else stays in
//! the database. Verification checks both the signature and the expiry,
//! so a tampered or stale token is indistinguishable from no token at
//! all for the callers.

use chrono::Utc;
use jsonwebtoken::{Algorithm, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i64,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl Claims {
    /// The user id this session belongs to
    pub fn user_id(&self) -> UserId {
        UserId::from_i64(self.sub)
    }
}

/// Issue a session token for a user, valid from now for the configured TTL
pub fn issue(user_id: UserId, config: &AuthConfig) -> AuthResult<String> {
    issue_at(user_id, config, Utc::now().timestamp())
}

/// Issue a token with an explicit issue timestamp
pub fn issue_at(user_id: UserId, config: &AuthConfig, issued_at: i64) -> AuthResult<String> {
    let claims = Claims {
        sub: user_id.as_i64(),
        iat: issued_at,
        exp: issued_at + config.session_ttl_secs(),
    };

    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &config.encoding_key())
        .map_err(AuthError::Token)
}

/// Verify a token's signature and expiry, returning its claims
///
/// Any failure collapses into [`AuthError::SessionInvalid`]; callers
/// never distinguish a forged token from an expired one.
pub fn verify(token: &str, config: &AuthConfig) -> AuthResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    jsonwebtoken::decode::<Claims>(token, &config.decoding_key(), &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::SessionInvalid)
}
