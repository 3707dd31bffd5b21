//! Register Use Case
//!
//! Validates the registration form, hashes the password and persists the
//! new account. Whatever goes wrong, the client gets the single generic
//! registration message; the real cause goes to the logs.

use std::sync::Arc;

use tracing::info;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::user::{Address, NewUser};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    account_type::AccountType, email::Email, postal_code::Cep, tax_id::TaxId,
    user_password::{RawPassword, UserPassword},
    UserId,
};
use crate::error::{AuthError, AuthResult};

/// Registration form input, field-for-field
#[derive(Debug)]
pub struct RegisterInput {
    pub tipo_usuario: i16,
    pub nome_razao_social: String,
    pub cpf_cnpj: String,
    pub logradouro: String,
    pub numero_logradouro: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub cep: String,
    pub email: String,
    pub celular: String,
    pub senha: String,
}

/// Successful registration output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R> {
    repository: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub fn new(repository: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repository, config }
    }

    /// Validate, persist and open a session for the new account
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let new_user = Self::build_new_user(input, self.config.pepper())?;

        let user = self
            .repository
            .create(&new_user)
            .await
            .map_err(|e| AuthError::Registration(Box::new(e.to_app_error())))?;

        let token = session_token::issue(user.id, &self.config)?;

        info!(user_id = user.id.as_i64(), "User registered");

        Ok(RegisterOutput {
            user_id: user.id,
            token,
        })
    }

    /// Parse the raw form into domain values
    ///
    /// The form is validated client-side; server-side failures here are
    /// either bypassed clients or drift between the two validators, and
    /// all collapse into the generic registration error.
    fn build_new_user(input: RegisterInput, pepper: Option<&[u8]>) -> AuthResult<NewUser> {
        fn reg<E: std::error::Error + Send + Sync + 'static>(e: E) -> AuthError {
            AuthError::Registration(Box::new(e))
        }

        let account_type = AccountType::from_id(input.tipo_usuario).map_err(reg)?;
        let tax_id = TaxId::new(&input.cpf_cnpj, account_type).map_err(reg)?;
        let cep = Cep::new(&input.cep).map_err(reg)?;
        let email = Email::new(&input.email).map_err(reg)?;

        let uf = input.uf.trim().to_uppercase();
        if uf.len() != 2 || !uf.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AuthError::Registration(Box::new(
                kernel::error::app_error::AppError::bad_request("UF deve conter 2 letras"),
            )));
        }

        let legal_name = input.nome_razao_social.trim().to_string();
        if legal_name.is_empty() {
            return Err(AuthError::Registration(Box::new(
                kernel::error::app_error::AppError::bad_request(
                    "Nome/Razão Social não pode ser vazio",
                ),
            )));
        }

        let raw = RawPassword::new(input.senha).map_err(reg)?;
        let password = UserPassword::from_raw(&raw, pepper).map_err(reg)?;

        Ok(NewUser {
            account_type,
            legal_name,
            tax_id,
            address: Address {
                logradouro: input.logradouro.trim().to_string(),
                numero: input.numero_logradouro.trim().to_string(),
                complemento: input.complemento.trim().to_string(),
                bairro: input.bairro.trim().to_string(),
                localidade: input.localidade.trim().to_string(),
                uf,
                cep,
            },
            email,
            phone: input.celular.trim().to_string(),
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryUserRepository;

    fn valid_input() -> RegisterInput {
        RegisterInput {
            tipo_usuario: 1,
            nome_razao_social: "Maria da Silva".to_string(),
            cpf_cnpj: "123.456.789-01".to_string(),
            logradouro: "Avenida Paulista".to_string(),
            numero_logradouro: "1000".to_string(),
            complemento: "Apto 12".to_string(),
            bairro: "Bela Vista".to_string(),
            localidade: "São Paulo".to_string(),
            uf: "sp".to_string(),
            cep: "01310-100".to_string(),
            email: "maria@example.com".to_string(),
            celular: "11999990000".to_string(),
            senha: "SenhaSegura123!".to_string(),
        }
    }

    fn use_case() -> (Arc<InMemoryUserRepository>, RegisterUseCase<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::with_secret(vec![42u8; 32]));
        (repo.clone(), RegisterUseCase::new(repo, config))
    }

    #[tokio::test]
    async fn test_register_success() {
        let (repo, uc) = use_case();

        let out = uc.execute(valid_input()).await.unwrap();

        assert_eq!(out.user_id.as_i64(), 1);
        assert!(!out.token.is_empty());

        let stored = repo
            .find_by_email(&Email::new("maria@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        // Stored normalized and hashed, never raw form text
        assert_eq!(stored.tax_id.as_digits(), "12345678901");
        assert_eq!(stored.address.cep.as_digits(), "01310100");
        assert_eq!(stored.address.uf, "SP");
        assert_ne!(stored.password.as_phc_string(), "SenhaSegura123!");
    }

    #[tokio::test]
    async fn test_register_rejects_wrong_tax_id_length() {
        let (_, uc) = use_case();

        let mut input = valid_input();
        input.cpf_cnpj = "1234567890".to_string(); // 10 digits

        let err = uc.execute(input).await.unwrap_err();
        assert!(matches!(err, AuthError::Registration(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_organization_with_cpf() {
        let (_, uc) = use_case();

        let mut input = valid_input();
        input.tipo_usuario = 2; // organization expects 14 digits

        let err = uc.execute(input).await.unwrap_err();
        assert!(matches!(err, AuthError::Registration(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_cep() {
        let (_, uc) = use_case();

        let mut input = valid_input();
        input.cep = "0131010".to_string();

        assert!(uc.execute(input).await.is_err());
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_account_type() {
        let (_, uc) = use_case();

        let mut input = valid_input();
        input.tipo_usuario = 3;

        assert!(uc.execute(input).await.is_err());
    }

    #[tokio::test]
    async fn test_register_token_belongs_to_new_user() {
        let (_, uc) = use_case();

        let out = uc.execute(valid_input()).await.unwrap();

        let config = AuthConfig::with_secret(vec![42u8; 32]);
        let claims = session_token::verify(&out.token, &config).unwrap();
        assert_eq!(claims.sub, out.user_id.as_i64());
    }
}
