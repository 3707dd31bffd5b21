//! Repository Trait

use crate::domain::entities::{Donation, NewDonation};
use crate::domain::value_objects::DonationFilter;
use crate::error::DonationResult;

/// Donation repository trait
#[trait_variant::make(DonationRepository: Send)]
pub trait LocalDonationRepository {
    /// Persist a new donation; the store assigns the id
    async fn create(&self, donation: &NewDonation) -> DonationResult<Donation>;

    /// List donations matching the filter, newest first
    async fn list(&self, filter: &DonationFilter) -> DonationResult<Vec<Donation>>;
}
