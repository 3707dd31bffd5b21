//! Domain Value Objects

use kernel::error::app_error::{AppError, AppResult};

/// Availability of a donated item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationStatus {
    Disponivel,
    Indisponivel,
}

impl DonationStatus {
    /// Wire and storage value
    pub fn code(&self) -> &'static str {
        match self {
            DonationStatus::Disponivel => "disponivel",
            DonationStatus::Indisponivel => "indisponivel",
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        match code {
            "disponivel" => Ok(DonationStatus::Disponivel),
            "indisponivel" => Ok(DonationStatus::Indisponivel),
            other => Err(AppError::bad_request(format!(
                "Status de doação inválido: {}",
                other
            ))),
        }
    }
}

/// Category of a donated item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationCategory {
    Eletronicos,
    Moveis,
    Roupas,
    Alimentos,
    Brinquedos,
    Livros,
}

impl DonationCategory {
    pub const ALL: [DonationCategory; 6] = [
        DonationCategory::Eletronicos,
        DonationCategory::Moveis,
        DonationCategory::Roupas,
        DonationCategory::Alimentos,
        DonationCategory::Brinquedos,
        DonationCategory::Livros,
    ];

    /// Wire and storage value
    pub fn code(&self) -> &'static str {
        match self {
            DonationCategory::Eletronicos => "eletronicos",
            DonationCategory::Moveis => "moveis",
            DonationCategory::Roupas => "roupas",
            DonationCategory::Alimentos => "alimentos",
            DonationCategory::Brinquedos => "brinquedos",
            DonationCategory::Livros => "livros",
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| {
                AppError::bad_request(format!("Categoria de doação inválida: {}", code))
            })
    }
}

/// Optional listing filters; `None` means no restriction
#[derive(Debug, Clone, Copy, Default)]
pub struct DonationFilter {
    pub status: Option<DonationStatus>,
    pub categoria: Option<DonationCategory>,
}
