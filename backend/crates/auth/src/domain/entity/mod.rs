//! Domain Entities

pub mod user;

pub use user::{Address, NewUser, User};
