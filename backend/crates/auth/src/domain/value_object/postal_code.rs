//! CEP Value Object
//!
//! Brazilian postal code: exactly 8 digits. The form displays it as
//! "01310-100" but the store always receives digits only.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// CEP digit count
const CEP_DIGITS: usize = 8;

/// Brazilian postal code, stored digits-only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cep(String);

impl Cep {
    /// Create from user input, accepting formatted ("01310-100") or raw
    /// ("01310100") values
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let digits: String = raw
            .as_ref()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if digits.len() != CEP_DIGITS {
            return Err(AppError::bad_request("CEP deve conter 8 dígitos"));
        }

        Ok(Self(digits))
    }

    /// Digits-only form, as persisted
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// Display form: "01310-100"
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
