//! Application Configuration
//!
//! Configuration for the auth application layer. The session secret is
//! mandatory: startup fails when `SESSION_SECRET` is absent or too
//! short, instead of silently signing with a built-in default.

use std::env;
use std::time::Duration;

use jsonwebtoken::{DecodingKey, EncodingKey};
use kernel::error::app_error::{AppError, AppResult};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

/// Minimum accepted session secret length in bytes
pub const MIN_SESSION_SECRET_LEN: usize = 32;

/// Session lifetime: one hour, matching the cookie Max-Age
pub const SESSION_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name (HttpOnly)
    pub session_cookie_name: String,
    /// Convenience cookie carrying the raw user id (never trusted server-side)
    pub donor_cookie_name: String,
    /// HMAC secret for JWT signing
    pub session_secret: Vec<u8>,
    /// Session TTL
    pub session_ttl: Duration,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy for the session cookie
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Build from environment variables
    ///
    /// `SESSION_SECRET` is required and must be at least
    /// [`MIN_SESSION_SECRET_LEN`] bytes. `COOKIE_SECURE=false` disables
    /// the Secure attribute for local development over plain HTTP.
    pub fn from_env() -> AppResult<Self> {
        let secret = env::var("SESSION_SECRET")
            .map_err(|_| AppError::internal("SESSION_SECRET must be set"))?;

        if secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(AppError::internal(format!(
                "SESSION_SECRET must be at least {} bytes",
                MIN_SESSION_SECRET_LEN
            )));
        }

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v != "false")
            .unwrap_or(true);

        let password_pepper = env::var("PASSWORD_PEPPER")
            .ok()
            .filter(|p| !p.is_empty())
            .map(|p| p.into_bytes());

        Ok(Self {
            cookie_secure,
            password_pepper,
            ..Self::with_secret(secret.into_bytes())
        })
    }

    /// Build with an explicit secret (tests, embedding)
    pub fn with_secret(secret: Vec<u8>) -> Self {
        Self {
            session_cookie_name: "auth_token".to_string(),
            donor_cookie_name: "doador".to_string(),
            session_secret: secret,
            session_ttl: SESSION_TTL,
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            password_pepper: None,
        }
    }

    /// Config for development: random secret, insecure cookie
    pub fn development() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; MIN_SESSION_SECRET_LEN];
        rand::thread_rng().fill_bytes(&mut secret);
        Self {
            cookie_secure: false,
            ..Self::with_secret(secret)
        }
    }

    /// JWT signing key
    pub fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.session_secret)
    }

    /// JWT verification key
    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.session_secret)
    }

    /// Session TTL in whole seconds (cookie Max-Age)
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Cookie settings for the HttpOnly session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: Some(self.cookie_same_site),
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl_secs()),
        }
    }

    /// Cookie settings for the plain donor-id convenience cookie
    pub fn donor_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.donor_cookie_name.clone(),
            secure: false,
            http_only: false,
            same_site: None,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}
