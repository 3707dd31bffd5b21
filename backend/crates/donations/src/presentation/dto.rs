//! API DTOs (Data Transfer Objects)
//!
//! The donation form submits PascalCase field names; the listing answers
//! with the same casing so the frontend reads both sides uniformly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Donation;

/// Donation creation request
///
/// No donor field: the donor is whoever holds the verified session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonationRequest {
    #[serde(rename = "Descricao")]
    pub descricao: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Categoria")]
    pub categoria: String,
    #[serde(rename = "Data_Cadastro", default)]
    pub data_cadastro: Option<String>,
}

/// Listing query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDonationsQuery {
    pub status: Option<String>,
    pub categoria: Option<String>,
}

/// One donation in the listing response
#[derive(Debug, Clone, Serialize)]
pub struct DonationResponse {
    pub id: i64,
    #[serde(rename = "Descricao")]
    pub descricao: String,
    #[serde(rename = "Status")]
    pub status: &'static str,
    #[serde(rename = "Doador")]
    pub doador: i64,
    #[serde(rename = "Categoria")]
    pub categoria: &'static str,
    #[serde(rename = "Data_Cadastro")]
    pub data_cadastro: DateTime<Utc>,
}

impl From<&Donation> for DonationResponse {
    fn from(donation: &Donation) -> Self {
        Self {
            id: donation.id.as_i64(),
            descricao: donation.descricao.clone(),
            status: donation.status.code(),
            doador: donation.doador.as_i64(),
            categoria: donation.categoria.code(),
            data_cadastro: donation.data_cadastro,
        }
    }
}

/// Message-only response, shared shape with the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
