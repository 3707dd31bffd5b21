//! Account Type Value Object
//!
//! Discriminates individual donors (CPF holders) from organizations
//! (CNPJ holders). The numeric ids match what the registration form
//! submits and what the store persists.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum AccountType {
    /// Pessoa física - identified by an 11-digit CPF
    #[default]
    Individual = 1,

    /// Pessoa jurídica - identified by a 14-digit CNPJ
    Organization = 2,
}

impl AccountType {
    /// Numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// String code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Individual => "pessoa_fisica",
            Self::Organization => "pessoa_juridica",
        }
    }

    /// Expected number of tax-id digits for this account type
    #[inline]
    pub const fn tax_id_digits(&self) -> usize {
        match self {
            Self::Individual => 11,
            Self::Organization => 14,
        }
    }

    /// Parse from the numeric form/database value
    pub fn from_id(id: i16) -> AppResult<Self> {
        match id {
            1 => Ok(Self::Individual),
            2 => Ok(Self::Organization),
            _ => Err(AppError::bad_request(format!(
                "Tipo de usuário inválido: {}",
                id
            ))),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
