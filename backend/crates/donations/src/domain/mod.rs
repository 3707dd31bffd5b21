//! Domain Layer

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{Donation, NewDonation};
pub use repository::DonationRepository;
pub use value_objects::{DonationCategory, DonationFilter, DonationStatus};
