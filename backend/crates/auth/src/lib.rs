//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, route guard
//!
//! ## Features
//! - User registration with Brazilian document validation (CPF/CNPJ, CEP)
//! - Login with email + password
//! - Stateless sessions: HS256 JWT in an HttpOnly cookie, 1 hour TTL
//! - Route guard middleware redirecting around protected and auth-only pages
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored in clear
//! - Session secret is mandatory configuration; no hardcoded fallback
//! - The route guard verifies token signature and expiry; a tampered or
//!   expired token is treated exactly like a missing one
//! - The donor identity used for writes always comes from the verified
//!   token, never from the plain `doador` convenience cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_token;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
