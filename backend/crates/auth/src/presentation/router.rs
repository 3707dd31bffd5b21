//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router with the PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(Arc::new(repo), config)
}

/// Create an auth router for any repository implementation
///
/// Known paths answer 405 with the contract message for unsupported
/// methods instead of axum's default empty 405.
pub fn auth_router_generic<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route(
            "/login",
            post(handlers::login::<R>).fallback(handlers::method_not_allowed),
        )
        .route(
            "/register",
            post(handlers::register::<R>).fallback(handlers::method_not_allowed),
        )
        .route(
            "/logout",
            get(handlers::logout::<R>).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}
