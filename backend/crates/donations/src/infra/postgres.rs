//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{DonationId, UserId};
use sqlx::PgPool;

use crate::domain::entities::{Donation, NewDonation};
use crate::domain::repository::DonationRepository;
use crate::domain::value_objects::{DonationCategory, DonationFilter, DonationStatus};
use crate::error::{DonationError, DonationResult};

/// PostgreSQL-backed donation repository
#[derive(Clone)]
pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DonationRepository for PgDonationRepository {
    async fn create(&self, donation: &NewDonation) -> DonationResult<Donation> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO donations (descricao, status, doador, categoria, data_cadastro)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&donation.descricao)
        .bind(donation.status.code())
        .bind(donation.doador.as_i64())
        .bind(donation.categoria.code())
        .bind(donation.data_cadastro)
        .fetch_one(&self.pool)
        .await?;

        Ok(Donation::from_new(
            donation.clone(),
            DonationId::from_i64(id),
        ))
    }

    async fn list(&self, filter: &DonationFilter) -> DonationResult<Vec<Donation>> {
        // NULL filter parameters disable the corresponding predicate
        let rows = sqlx::query_as::<_, DonationRow>(
            r#"
            SELECT id, descricao, status, doador, categoria, data_cadastro
            FROM donations
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::TEXT IS NULL OR categoria = $2)
            ORDER BY data_cadastro DESC, id DESC
            "#,
        )
        .bind(filter.status.map(|s| s.code()))
        .bind(filter.categoria.map(|c| c.code()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DonationRow::into_donation).collect()
    }
}

#[derive(sqlx::FromRow)]
struct DonationRow {
    id: i64,
    descricao: String,
    status: String,
    doador: i64,
    categoria: String,
    data_cadastro: DateTime<Utc>,
}

impl DonationRow {
    fn into_donation(self) -> DonationResult<Donation> {
        fn corrupt(e: kernel::error::app_error::AppError) -> DonationError {
            DonationError::Internal(format!("Invalid donation row: {}", e))
        }

        Ok(Donation {
            id: DonationId::from_i64(self.id),
            descricao: self.descricao,
            status: DonationStatus::from_code(&self.status).map_err(corrupt)?,
            doador: UserId::from_i64(self.doador),
            categoria: DonationCategory::from_code(&self.categoria).map_err(corrupt)?,
            data_cadastro: self.data_cadastro,
        })
    }
}
