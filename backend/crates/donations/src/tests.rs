//! Unit tests for the donations crate

use std::sync::{Arc, Mutex};

use chrono::Utc;
use kernel::id::{DonationId, UserId};

use crate::domain::entities::{Donation, NewDonation};
use crate::domain::repository::DonationRepository;
use crate::domain::value_objects::DonationFilter;
use crate::error::DonationResult;

/// In-memory donation store; ids are assigned sequentially starting at 1
pub(crate) struct InMemoryDonationRepository {
    donations: Mutex<Vec<Donation>>,
}

impl InMemoryDonationRepository {
    pub fn new() -> Self {
        Self {
            donations: Mutex::new(Vec::new()),
        }
    }

    pub fn all(&self) -> Vec<Donation> {
        self.donations.lock().unwrap().clone()
    }
}

impl DonationRepository for InMemoryDonationRepository {
    async fn create(&self, donation: &NewDonation) -> DonationResult<Donation> {
        let mut donations = self.donations.lock().unwrap();
        let id = donations.len() as i64 + 1;
        let created = Donation::from_new(donation.clone(), DonationId::from_i64(id));
        donations.push(created.clone());
        Ok(created)
    }

    async fn list(&self, filter: &DonationFilter) -> DonationResult<Vec<Donation>> {
        let mut matched: Vec<Donation> = self
            .donations
            .lock()
            .unwrap()
            .iter()
            .filter(|d| filter.status.is_none_or(|s| d.status == s))
            .filter(|d| filter.categoria.is_none_or(|c| d.categoria == c))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.data_cadastro.cmp(&a.data_cadastro));
        Ok(matched)
    }
}

mod value_object_tests {
    use crate::domain::value_objects::{DonationCategory, DonationStatus};

    #[test]
    fn test_status_codes_round_trip() {
        for status in [DonationStatus::Disponivel, DonationStatus::Indisponivel] {
            assert_eq!(DonationStatus::from_code(status.code()).unwrap(), status);
        }
        assert!(DonationStatus::from_code("vendido").is_err());
        assert!(DonationStatus::from_code("").is_err());
    }

    #[test]
    fn test_category_codes_round_trip() {
        for categoria in DonationCategory::ALL {
            assert_eq!(
                DonationCategory::from_code(categoria.code()).unwrap(),
                categoria
            );
        }
        assert!(DonationCategory::from_code("imoveis").is_err());
        // Codes are exact, no case folding
        assert!(DonationCategory::from_code("Livros").is_err());
    }
}

mod date_parsing_tests {
    use crate::application::create_donation::parse_data_cadastro;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_accepts_rfc3339() {
        let now = Utc::now();
        let parsed = parse_data_cadastro(Some("2024-05-10T14:30:00Z"), now);
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 10, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_accepts_datetime_local_shape() {
        let now = Utc::now();
        let parsed = parse_data_cadastro(Some("2024-05-10T14:30"), now);
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 10, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_accepts_bare_date() {
        let now = Utc::now();
        let parsed = parse_data_cadastro(Some("2024-05-10"), now);
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_absent_or_garbage_falls_back_to_now() {
        let now = Utc::now();
        assert_eq!(parse_data_cadastro(None, now), now);
        assert_eq!(parse_data_cadastro(Some(""), now), now);
        assert_eq!(parse_data_cadastro(Some("   "), now), now);
        assert_eq!(parse_data_cadastro(Some("10/05/2024"), now), now);
    }
}

mod use_case_tests {
    use super::*;
    use crate::application::{CreateDonationInput, CreateDonationUseCase, ListDonationsUseCase};
    use crate::error::DonationError;

    fn input(descricao: &str, status: &str, categoria: &str) -> CreateDonationInput {
        CreateDonationInput {
            descricao: descricao.to_string(),
            status: status.to_string(),
            categoria: categoria.to_string(),
            data_cadastro: None,
        }
    }

    #[tokio::test]
    async fn test_create_records_authenticated_donor() {
        let repo = Arc::new(InMemoryDonationRepository::new());
        let use_case = CreateDonationUseCase::new(repo.clone());

        let donation = use_case
            .execute(
                UserId::from_i64(7),
                input("Sofá de dois lugares", "disponivel", "moveis"),
            )
            .await
            .unwrap();

        assert_eq!(donation.doador.as_i64(), 7);
        assert_eq!(repo.all().len(), 1);
        assert_eq!(repo.all()[0].descricao, "Sofá de dois lugares");
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_status() {
        let use_case = CreateDonationUseCase::new(Arc::new(InMemoryDonationRepository::new()));

        let err = use_case
            .execute(UserId::from_i64(1), input("Sofá", "reservado", "moveis"))
            .await
            .unwrap_err();

        assert!(matches!(err, DonationError::Creation(_)));
        assert_eq!(err.to_string(), "Erro no cadastro da doação");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_description() {
        let use_case = CreateDonationUseCase::new(Arc::new(InMemoryDonationRepository::new()));

        let err = use_case
            .execute(UserId::from_i64(1), input("   ", "disponivel", "moveis"))
            .await
            .unwrap_err();

        assert!(matches!(err, DonationError::Creation(_)));
    }

    #[tokio::test]
    async fn test_list_filters_by_status_and_categoria() {
        let repo = Arc::new(InMemoryDonationRepository::new());
        let create = CreateDonationUseCase::new(repo.clone());
        let donor = UserId::from_i64(1);

        create
            .execute(donor, input("Televisão", "disponivel", "eletronicos"))
            .await
            .unwrap();
        create
            .execute(donor, input("Sofá", "indisponivel", "moveis"))
            .await
            .unwrap();
        create
            .execute(donor, input("Notebook", "disponivel", "eletronicos"))
            .await
            .unwrap();

        let list = ListDonationsUseCase::new(repo.clone());

        let all = list.execute(None, None).await.unwrap();
        assert_eq!(all.len(), 3);

        let available_electronics = list
            .execute(Some("disponivel"), Some("eletronicos"))
            .await
            .unwrap();
        assert_eq!(available_electronics.len(), 2);

        let furniture = list.execute(None, Some("moveis")).await.unwrap();
        assert_eq!(furniture.len(), 1);
        assert_eq!(furniture[0].descricao, "Sofá");
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_filter_values() {
        let list = ListDonationsUseCase::new(Arc::new(InMemoryDonationRepository::new()));

        assert!(matches!(
            list.execute(Some("vendido"), None).await,
            Err(DonationError::Validation(_))
        ));
        assert!(matches!(
            list.execute(None, Some("imoveis")).await,
            Err(DonationError::Validation(_))
        ));
    }
}

mod router_tests {
    use super::*;
    use crate::presentation::router::donations_router_generic;
    use auth::application::config::AuthConfig;
    use auth::application::session_token;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::with_secret(vec![42u8; 32]))
    }

    fn session_cookie(config: &AuthConfig, user_id: i64) -> String {
        let token = session_token::issue(UserId::from_i64(user_id), config).unwrap();
        format!("auth_token={}", token)
    }

    fn donation_body() -> String {
        serde_json::json!({
            "Descricao": "Televisão 32 polegadas",
            "Status": "disponivel",
            "Categoria": "eletronicos",
            "Data_Cadastro": "2024-05-10T14:30"
        })
        .to_string()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_with_session_succeeds() {
        let config = test_config();
        let repo = Arc::new(InMemoryDonationRepository::new());
        let app = donations_router_generic(repo.clone(), config.clone());

        let response = app
            .oneshot(
                Request::post("/doacoes")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::COOKIE, session_cookie(&config, 7))
                    .body(Body::from(donation_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "Cadastro doação bem-sucedido"
        );
        // Donor comes from the token, not from any client field
        assert_eq!(repo.all()[0].doador.as_i64(), 7);
    }

    #[tokio::test]
    async fn test_create_without_session_is_401() {
        let app = donations_router_generic(
            Arc::new(InMemoryDonationRepository::new()),
            test_config(),
        );

        let response = app
            .oneshot(
                Request::post("/doacoes")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(donation_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["message"], "Não autenticado");
    }

    #[tokio::test]
    async fn test_create_malformed_body_gets_extractor_rejection() {
        // The JSON extractor runs before the handler, so a body it cannot
        // parse is refused with its own 4xx even when no session is
        // present; nothing is persisted either way.
        let repo = Arc::new(InMemoryDonationRepository::new());
        let app = donations_router_generic(repo.clone(), test_config());

        let response = app
            .oneshot(
                Request::post("/doacoes")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(repo.all().is_empty());
    }

    #[tokio::test]
    async fn test_create_ignores_doador_cookie() {
        let config = test_config();
        let repo = Arc::new(InMemoryDonationRepository::new());
        let app = donations_router_generic(repo.clone(), config.clone());

        let cookies = format!("doador=999; {}", session_cookie(&config, 7));
        let response = app
            .oneshot(
                Request::post("/doacoes")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::COOKIE, cookies)
                    .body(Body::from(donation_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repo.all()[0].doador.as_i64(), 7);
    }

    #[tokio::test]
    async fn test_create_with_forged_token_is_401() {
        let config = test_config();
        let other = AuthConfig::with_secret(vec![43u8; 32]);
        let app = donations_router_generic(
            Arc::new(InMemoryDonationRepository::new()),
            config,
        );

        let response = app
            .oneshot(
                Request::post("/doacoes")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::COOKIE, session_cookie(&other, 7))
                    .body(Body::from(donation_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_is_public_and_filterable() {
        let config = test_config();
        let repo = Arc::new(InMemoryDonationRepository::new());

        let now = Utc::now();
        for (descricao, status, categoria) in [
            ("Televisão", "disponivel", "eletronicos"),
            ("Sofá", "indisponivel", "moveis"),
        ] {
            repo.create(&NewDonation {
                descricao: descricao.to_string(),
                status: crate::domain::value_objects::DonationStatus::from_code(status).unwrap(),
                doador: UserId::from_i64(1),
                categoria: crate::domain::value_objects::DonationCategory::from_code(categoria)
                    .unwrap(),
                data_cadastro: now,
            })
            .await
            .unwrap();
        }

        let app = donations_router_generic(repo, config);

        let response = app
            .clone()
            .oneshot(
                Request::get("/doacoes?status=disponivel")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["Descricao"], "Televisão");
        assert_eq!(body[0]["Status"], "disponivel");

        let response = app
            .oneshot(
                Request::get("/doacoes?categoria=imoveis")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_method_is_405_with_message() {
        let app = donations_router_generic(
            Arc::new(InMemoryDonationRepository::new()),
            test_config(),
        );

        let response = app
            .oneshot(Request::delete("/doacoes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["message"], "Método não permitido");
    }
}
