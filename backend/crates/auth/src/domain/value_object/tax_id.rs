//! CPF/CNPJ Value Object
//!
//! Brazilian tax identifier: 11 digits (CPF) for individuals, 14 digits
//! (CNPJ) for organizations. Formatting characters are stripped at the
//! boundary; the store only ever sees digits.

use crate::domain::value_object::account_type::AccountType;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tax identifier, stored digits-only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxId(String);

impl TaxId {
    /// Create from user input, validating the digit count against the
    /// account type (11 for CPF, 14 for CNPJ)
    pub fn new(raw: impl AsRef<str>, account_type: AccountType) -> AppResult<Self> {
        let digits: String = raw
            .as_ref()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        let expected = account_type.tax_id_digits();
        if digits.len() != expected {
            return Err(AppError::bad_request(match account_type {
                AccountType::Individual => "CPF deve conter 11 dígitos",
                AccountType::Organization => "CNPJ deve conter 14 dígitos",
            }));
        }

        Ok(Self(digits))
    }

    /// Digits-only form, as persisted
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// Display form: "000.000.000-00" for CPF, "00.000.000/0000-00" for CNPJ
    pub fn formatted(&self) -> String {
        let d = &self.0;
        if d.len() == 11 {
            format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
        } else {
            format!(
                "{}.{}.{}/{}-{}",
                &d[..2],
                &d[2..5],
                &d[5..8],
                &d[8..12],
                &d[12..]
            )
        }
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
