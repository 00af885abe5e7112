//! Tipos de erro para o crate esa

use thiserror::Error;

/// Erros do cliente esa.io
#[derive(Debug, Error)]
pub enum EsaError {
    /// Erro de requisição HTTP
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API do esa.io (status code fora de 2xx)
    #[error("esa API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, EsaError>;
