//! List Donations Use Case

use std::sync::Arc;

use crate::domain::entities::Donation;
use crate::domain::repository::DonationRepository;
use crate::domain::value_objects::{DonationCategory, DonationFilter, DonationStatus};
use crate::error::{DonationError, DonationResult};

/// List donations use case
pub struct ListDonationsUseCase<R> {
    repository: Arc<R>,
}

impl<R: DonationRepository> ListDonationsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List donations, optionally narrowed by status and categoria codes
    pub async fn execute(
        &self,
        status: Option<&str>,
        categoria: Option<&str>,
    ) -> DonationResult<Vec<Donation>> {
        let filter = DonationFilter {
            status: status
                .map(DonationStatus::from_code)
                .transpose()
                .map_err(|e| DonationError::Validation(e.message().to_string()))?,
            categoria: categoria
                .map(DonationCategory::from_code)
                .transpose()
                .map_err(|e| DonationError::Validation(e.message().to_string()))?,
        };

        self.repository.list(&filter).await
    }
}
