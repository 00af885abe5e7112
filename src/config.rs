//! Configuração do cliente via variáveis de ambiente
//!
//! Variáveis reconhecidas:
//!
//! - `ESA_ACCESS_TOKEN` (obrigatória): personal access token
//! - `ESA_TEAM` (obrigatória): slug da equipe
//! - `ESA_API_BASE_URL` (opcional): URL base alternativa da API

use crate::client::ESA_API_V1;
use crate::error::{EsaError, Result};
use std::env;

/// Configuração carregada do ambiente
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub access_token: String,
    pub team: String,
    pub base_url: String,
}

impl EnvConfig {
    /// Carrega as configurações do ambiente
    ///
    /// Um arquivo `.env` no diretório atual é honrado fora de testes.
    /// Variáveis obrigatórias ausentes ou vazias produzem `ConfigError`.
    pub fn load() -> Result<Self> {
        // Durante testes, as variáveis são configuradas diretamente
        if cfg!(not(test)) {
            dotenvy::dotenv().ok();
        }

        let access_token = Self::get_env_var("ESA_ACCESS_TOKEN")?;
        let team = Self::get_env_var("ESA_TEAM")?;
        let base_url =
            env::var("ESA_API_BASE_URL").unwrap_or_else(|_| ESA_API_V1.to_string());

        Ok(Self {
            access_token,
            team,
            base_url,
        })
    }

    /// Obtém variável de ambiente obrigatória
    fn get_env_var(key: &str) -> Result<String> {
        env::var(key)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| EsaError::ConfigError(format!("{} não encontrado", key)))
    }
}
