//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the existing frontend wire format exactly,
//! including its mixed casing.

use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

// ============================================================================
// Register
// ============================================================================

/// Registration request, one field per form input
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "TipoUsuario")]
    pub tipo_usuario: i16,
    #[serde(rename = "NomeRazaoSocial")]
    pub nome_razao_social: String,
    #[serde(rename = "CPFCNPJ")]
    pub cpf_cnpj: String,
    #[serde(rename = "Logradouro")]
    pub logradouro: String,
    #[serde(rename = "NumeroLogradouro")]
    pub numero_logradouro: String,
    #[serde(rename = "Complemento", default)]
    pub complemento: String,
    #[serde(rename = "Bairro")]
    pub bairro: String,
    #[serde(rename = "Localidade")]
    pub localidade: String,
    #[serde(rename = "UF")]
    pub uf: String,
    #[serde(rename = "Cep")]
    pub cep: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Celular")]
    pub celular: String,
    #[serde(rename = "Senha")]
    pub senha: String,
}

// ============================================================================
// Shared
// ============================================================================

/// Every auth endpoint answers with a single message field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
