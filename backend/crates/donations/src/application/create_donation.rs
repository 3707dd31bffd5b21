//! Create Donation Use Case

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use kernel::id::UserId;
use tracing::info;

use crate::domain::entities::{Donation, NewDonation};
use crate::domain::repository::DonationRepository;
use crate::domain::value_objects::{DonationCategory, DonationStatus};
use crate::error::{DonationError, DonationResult};

/// Donation form input; the donor id is not part of it, it always comes
/// from the verified session
#[derive(Debug)]
pub struct CreateDonationInput {
    pub descricao: String,
    pub status: String,
    pub categoria: String,
    pub data_cadastro: Option<String>,
}

/// Create donation use case
pub struct CreateDonationUseCase<R> {
    repository: Arc<R>,
}

impl<R: DonationRepository> CreateDonationUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and persist a donation for an authenticated donor
    pub async fn execute(
        &self,
        donor: UserId,
        input: CreateDonationInput,
    ) -> DonationResult<Donation> {
        fn creation<E: std::error::Error + Send + Sync + 'static>(e: E) -> DonationError {
            DonationError::Creation(Box::new(e))
        }

        let status = DonationStatus::from_code(&input.status).map_err(creation)?;
        let categoria = DonationCategory::from_code(&input.categoria).map_err(creation)?;

        let descricao = input.descricao.trim().to_string();
        if descricao.is_empty() {
            return Err(DonationError::Creation(Box::new(
                kernel::error::app_error::AppError::bad_request(
                    "Descrição não pode ser vazia",
                ),
            )));
        }

        let new_donation = NewDonation {
            descricao,
            status,
            doador: donor,
            categoria,
            data_cadastro: parse_data_cadastro(input.data_cadastro.as_deref(), Utc::now()),
        };

        let donation = self
            .repository
            .create(&new_donation)
            .await
            .map_err(|e| DonationError::Creation(Box::new(e.to_app_error())))?;

        info!(
            donation_id = donation.id.as_i64(),
            doador = donation.doador.as_i64(),
            categoria = donation.categoria.code(),
            "Donation created"
        );

        Ok(donation)
    }
}

/// Parse the submitted creation timestamp
///
/// Accepts RFC 3339 and the `datetime-local` input shapes; anything
/// missing or unparseable falls back to the server clock.
pub fn parse_data_cadastro(raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return now;
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return naive.and_utc();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return naive.and_utc();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_time(chrono::NaiveTime::MIN).and_utc();
    }

    now
}
