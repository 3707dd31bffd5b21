//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{DonationId, UserId};

use crate::domain::value_objects::{DonationCategory, DonationStatus};

/// A donation record not yet persisted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewDonation {
    pub descricao: String,
    pub status: DonationStatus,
    /// Always the id from the verified session token
    pub doador: UserId,
    pub categoria: DonationCategory,
    pub data_cadastro: DateTime<Utc>,
}

/// A persisted donation record
#[derive(Debug, Clone)]
pub struct Donation {
    pub id: DonationId,
    pub descricao: String,
    pub status: DonationStatus,
    pub doador: UserId,
    pub categoria: DonationCategory,
    pub data_cadastro: DateTime<Utc>,
}

impl Donation {
    /// Build the persisted entity from a new record plus the assigned id
    pub fn from_new(new: NewDonation, id: DonationId) -> Self {
        Self {
            id,
            descricao: new.descricao,
            status: new.status,
            doador: new.doador,
            categoria: new.categoria,
            data_cadastro: new.data_cadastro,
        }
    }
}
