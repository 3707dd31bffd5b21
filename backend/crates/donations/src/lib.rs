//! Donations Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - The donor attached to a new donation is always the `sub` claim of
//!   the verified session token; the plain `doador` cookie is ignored
//! - No session means no write: a well-formed request without a valid
//!   session token is refused with 401 before the handler touches the
//!   payload (a body the JSON extractor rejects gets its 4xx first)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{DonationError, DonationResult};
pub use infra::postgres::PgDonationRepository;
pub use presentation::router::donations_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgDonationRepository as DonationStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
