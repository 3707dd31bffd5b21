//! Application Layer

pub mod create_donation;
pub mod list_donations;

pub use create_donation::{CreateDonationInput, CreateDonationUseCase};
pub use list_donations::ListDonationsUseCase;
