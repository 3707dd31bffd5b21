//! Domain Value Objects

pub mod account_type;
pub mod email;
pub mod postal_code;
pub mod tax_id;
pub mod user_password;

pub use account_type::AccountType;
pub use email::Email;
pub use postal_code::Cep;
pub use tax_id::TaxId;
pub use user_password::{RawPassword, UserPassword};

/// Store-generated numeric user identifier
pub use kernel::id::UserId;
