//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer; handlers receive them injected through state so
//! tests can substitute a double.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user; the store assigns the id
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by email (first match; email has no unique constraint)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}
