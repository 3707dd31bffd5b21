//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::user::{Address, NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    account_type::AccountType, email::Email, postal_code::Cep, tax_id::TaxId,
    user_password::UserPassword, UserId,
};
use crate::error::AuthResult;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, InsertedRow>(
            r#"
            INSERT INTO users (
                tipo_usuario,
                nome_razao_social,
                cpf_cnpj,
                logradouro,
                numero_logradouro,
                complemento,
                bairro,
                localidade,
                uf,
                cep,
                email,
                celular,
                senha
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, data_criacao
            "#,
        )
        .bind(user.account_type.id())
        .bind(&user.legal_name)
        .bind(user.tax_id.as_digits())
        .bind(&user.address.logradouro)
        .bind(&user.address.numero)
        .bind(&user.address.complemento)
        .bind(&user.address.bairro)
        .bind(&user.address.localidade)
        .bind(&user.address.uf)
        .bind(user.address.cep.as_digits())
        .bind(user.email.as_str())
        .bind(&user.phone)
        .bind(user.password.as_phc_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(User::from_new(
            user.clone(),
            UserId::from_i64(row.id),
            row.data_criacao,
        ))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                tipo_usuario,
                nome_razao_social,
                cpf_cnpj,
                logradouro,
                numero_logradouro,
                complemento,
                bairro,
                localidade,
                uf,
                cep,
                email,
                celular,
                senha,
                data_criacao
            FROM users
            WHERE email = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct InsertedRow {
    id: i64,
    data_criacao: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    tipo_usuario: i16,
    nome_razao_social: String,
    cpf_cnpj: String,
    logradouro: String,
    numero_logradouro: String,
    complemento: String,
    bairro: String,
    localidade: String,
    uf: String,
    cep: String,
    email: String,
    celular: String,
    senha: String,
    data_criacao: DateTime<Utc>,
}

impl UserRow {
    /// Convert database row to domain entity
    ///
    /// A row that fails value-object reconstruction means corrupted or
    /// hand-edited data; it surfaces as an internal error.
    fn into_user(self) -> AuthResult<User> {
        fn corrupt(e: kernel::error::app_error::AppError) -> crate::error::AuthError {
            crate::error::AuthError::Internal(format!("Invalid user row: {}", e))
        }

        let account_type = AccountType::from_id(self.tipo_usuario).map_err(corrupt)?;
        let tax_id = TaxId::new(&self.cpf_cnpj, account_type).map_err(corrupt)?;
        let cep = Cep::new(&self.cep).map_err(corrupt)?;

        Ok(User {
            id: UserId::from_i64(self.id),
            account_type,
            legal_name: self.nome_razao_social,
            tax_id,
            address: Address {
                logradouro: self.logradouro,
                numero: self.numero_logradouro,
                complemento: self.complemento,
                bairro: self.bairro,
                localidade: self.localidade,
                uf: self.uf,
                cep,
            },
            email: Email::from_db(self.email),
            phone: self.celular,
            password: UserPassword::from_phc_string(self.senha)?,
            created_at: self.data_criacao,
        })
    }
}
