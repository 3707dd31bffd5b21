//! Route Guard Middleware
//!
//! Page-level navigation guard. Classifies the request path and
//! redirects based on session state:
//! - protected pages without a valid session redirect to `/login`
//! - login/registration pages with a valid session redirect to `/`
//! - everything else (including the API routes) passes through
//!
//! The session is only ever judged by verifying the token's signature
//! and expiry; a tampered or expired cookie behaves exactly like no
//! cookie.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;

/// Pages that require a session
const PROTECTED_PREFIXES: &[&str] = &["/doacoes", "/profile", "/settings"];

/// Pages that only make sense without a session
const AUTH_ONLY_PATHS: &[&str] = &["/login", "/registrar"];

/// Navigation class of a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Requires a valid session
    Protected,
    /// Login and registration pages; pointless with a session
    AuthOnly,
    /// No guard applies
    Other,
}

impl PathClass {
    /// Classify a request path
    ///
    /// Protected prefixes cover their subpaths (`/doacoes/123` is
    /// protected, `/doacoesx` is not). Auth-only paths match exactly.
    pub fn classify(path: &str) -> Self {
        for prefix in PROTECTED_PREFIXES {
            if path == *prefix || path.starts_with(&format!("{}/", prefix)) {
                return PathClass::Protected;
            }
        }

        if AUTH_ONLY_PATHS.contains(&path) {
            return PathClass::AuthOnly;
        }

        PathClass::Other
    }
}

/// Route guard, layered over the whole app with
/// `axum::middleware::from_fn_with_state`
pub async fn route_guard(
    State(config): State<Arc<AuthConfig>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let class = PathClass::classify(req.uri().path());

    if class == PathClass::Other {
        return next.run(req).await;
    }

    let authenticated = platform::cookie::extract_cookie(req.headers(), &config.session_cookie_name)
        .map(|token| session_token::verify(&token, &config).is_ok())
        .unwrap_or(false);

    match (class, authenticated) {
        (PathClass::Protected, false) => {
            tracing::debug!(path = req.uri().path(), "Unauthenticated access, redirecting");
            Redirect::to("/login").into_response()
        }
        (PathClass::AuthOnly, true) => Redirect::to("/").into_response(),
        _ => next.run(req).await,
    }
}
