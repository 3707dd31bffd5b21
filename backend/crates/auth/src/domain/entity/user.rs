//! User Entity
//!
//! A registered donor account. Created once at registration; the
//! application has no update or delete path for users.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_type::AccountType, email::Email, postal_code::Cep, tax_id::TaxId,
    user_password::UserPassword, UserId,
};

/// Postal address fields, kept verbatim from the registration form
/// except for the CEP which is normalized to digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub logradouro: String,
    pub numero: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub cep: Cep,
}

/// A user record not yet persisted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub account_type: AccountType,
    pub legal_name: String,
    pub tax_id: TaxId,
    pub address: Address,
    pub email: Email,
    pub phone: String,
    /// Always a hash; the plaintext never reaches the store
    pub password: UserPassword,
}

/// A persisted user record
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub account_type: AccountType,
    pub legal_name: String,
    pub tax_id: TaxId,
    pub address: Address,
    pub email: Email,
    pub phone: String,
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build the persisted entity from a new record plus store-assigned fields
    pub fn from_new(new: NewUser, id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            account_type: new.account_type,
            legal_name: new.legal_name,
            tax_id: new.tax_id,
            address: new.address,
            email: new.email,
            phone: new.phone,
            password: new.password,
            created_at,
        }
    }
}
