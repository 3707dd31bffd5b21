//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::application::session_token;
use kernel::id::UserId;

use crate::application::{CreateDonationInput, CreateDonationUseCase, ListDonationsUseCase};
use crate::domain::repository::DonationRepository;
use crate::error::{DonationError, DonationResult};
use crate::presentation::dto::{
    CreateDonationRequest, DonationResponse, ListDonationsQuery, MessageResponse,
};

/// Shared state for donation handlers
pub struct DonationsAppState<R> {
    pub repo: Arc<R>,
    pub auth_config: Arc<AuthConfig>,
}

impl<R> Clone for DonationsAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            auth_config: self.auth_config.clone(),
        }
    }
}

/// Resolve the donor from the verified session cookie
///
/// The plain `doador` cookie is deliberately never consulted here.
fn authenticated_donor(headers: &HeaderMap, config: &AuthConfig) -> DonationResult<UserId> {
    let token = platform::cookie::extract_cookie(headers, &config.session_cookie_name)
        .ok_or(DonationError::Unauthenticated)?;

    let claims =
        session_token::verify(&token, config).map_err(|_| DonationError::Unauthenticated)?;

    Ok(claims.user_id())
}

/// POST /api/doacoes
pub async fn create_donation<R>(
    State(state): State<DonationsAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<CreateDonationRequest>,
) -> DonationResult<impl IntoResponse>
where
    R: DonationRepository + Send + Sync + 'static,
{
    let donor = authenticated_donor(&headers, &state.auth_config)?;

    let use_case = CreateDonationUseCase::new(state.repo.clone());

    use_case
        .execute(
            donor,
            CreateDonationInput {
                descricao: req.descricao,
                status: req.status,
                categoria: req.categoria,
                data_cadastro: req.data_cadastro,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Cadastro doação bem-sucedido")),
    ))
}

/// GET /api/doacoes
pub async fn list_donations<R>(
    State(state): State<DonationsAppState<R>>,
    Query(query): Query<ListDonationsQuery>,
) -> DonationResult<Json<Vec<DonationResponse>>>
where
    R: DonationRepository + Send + Sync + 'static,
{
    let use_case = ListDonationsUseCase::new(state.repo.clone());

    let donations = use_case
        .execute(query.status.as_deref(), query.categoria.as_deref())
        .await?;

    Ok(Json(donations.iter().map(DonationResponse::from).collect()))
}

/// Shared fallback for requests hitting a known path with the wrong method
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageResponse::new("Método não permitido")),
    )
}
