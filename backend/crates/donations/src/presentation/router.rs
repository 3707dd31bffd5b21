//! Donations Router

use axum::{Router, routing::post};
use std::sync::Arc;

use auth::application::config::AuthConfig;

use crate::domain::repository::DonationRepository;
use crate::infra::postgres::PgDonationRepository;
use crate::presentation::handlers::{self, DonationsAppState};

/// Create the donations router with the PostgreSQL repository
pub fn donations_router(repo: PgDonationRepository, auth_config: Arc<AuthConfig>) -> Router {
    donations_router_generic(Arc::new(repo), auth_config)
}

/// Create a donations router for any repository implementation
pub fn donations_router_generic<R>(repo: Arc<R>, auth_config: Arc<AuthConfig>) -> Router
where
    R: DonationRepository + Send + Sync + 'static,
{
    let state = DonationsAppState { repo, auth_config };

    Router::new()
        .route(
            "/doacoes",
            post(handlers::create_donation::<R>)
                .get(handlers::list_donations::<R>)
                .fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}
