//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, MessageResponse, RegisterRequest};

/// Shared state for auth handlers
pub struct AuthAppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
///
/// On success sets the HttpOnly session cookie plus the plain `doador`
/// convenience cookie with the user id. The latter exists for the
/// frontend only; nothing server-side reads it back.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            senha: req.senha,
        })
        .await?;

    let session_cookie = state.config.session_cookie().build_set_cookie(&output.token);
    let donor_cookie = state
        .config
        .donor_cookie()
        .build_set_cookie(&output.user_id.as_i64().to_string());

    Ok((
        StatusCode::OK,
        AppendHeaders([
            (header::SET_COOKIE, session_cookie),
            (header::SET_COOKIE, donor_cookie),
        ]),
        Json(MessageResponse::new("Login bem-sucedido")),
    ))
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
///
/// A successful registration immediately opens a session for the new
/// account.
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            tipo_usuario: req.tipo_usuario,
            nome_razao_social: req.nome_razao_social,
            cpf_cnpj: req.cpf_cnpj,
            logradouro: req.logradouro,
            numero_logradouro: req.numero_logradouro,
            complemento: req.complemento,
            bairro: req.bairro,
            localidade: req.localidade,
            uf: req.uf,
            cep: req.cep,
            email: req.email,
            celular: req.celular,
            senha: req.senha,
        })
        .await?;

    let session_cookie = state.config.session_cookie().build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, session_cookie)]),
        Json(MessageResponse::new("Registro bem-sucedido")),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /api/logout
///
/// Stateless sessions cannot be revoked server-side; logout just expires
/// the session cookie in the browser.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: UserRepository + Send + Sync + 'static,
{
    let clear_cookie = state.config.session_cookie().build_delete_cookie();

    (
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, clear_cookie)]),
        Json(MessageResponse::new("Logged out")),
    )
}

// ============================================================================
// Fallbacks
// ============================================================================

/// Shared fallback for requests hitting a known path with the wrong method
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageResponse::new("Método não permitido")),
    )
}
