//! Cliente HTTP para a API do esa.io

use crate::error::{EsaError, Result};
use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// URL base da API v1 do esa.io
pub const ESA_API_V1: &str = "https://api.esa.io/v1";

/// Cliente para interagir com a API do esa.io
///
/// Mantém o token de acesso, o slug da equipe alvo e o estado opcional de
/// paginação/busca (`page` / `q`), aplicados a toda requisição enviada.
///
/// # Mutação
///
/// Os campos de configuração (`team`, `page`, `query`) são mutáveis apenas
/// pelo dono do valor. Para uso concorrente, clone o cliente por tarefa.
#[derive(Clone)]
pub struct EsaClient {
    http_client: HttpClient,
    access_token: String,
    team: String,
    base_url: String,
    page: Option<u32>,
    query: Option<String>,
}

impl EsaClient {
    /// Cria um novo cliente esa.io
    ///
    /// # Argumentos
    ///
    /// * `access_token` - Personal access token da equipe
    /// * `team` - Slug da equipe (ex.: "docs" em docs.esa.io)
    ///
    /// # Timeouts
    ///
    /// - Total: 10s
    /// - Connect: 5s
    pub fn new(access_token: impl Into<String>, team: impl Into<String>) -> Result<Self> {
        Self::with_timeouts(access_token, team, 10, 5)
    }

    /// Cria um novo cliente com timeouts customizados
    pub fn with_timeouts(
        access_token: impl Into<String>,
        team: impl Into<String>,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| EsaError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            access_token: access_token.into(),
            team: team.into(),
            base_url: ESA_API_V1.to_string(),
            page: None,
            query: None,
        })
    }

    /// Cria um cliente a partir das variáveis de ambiente (`ESA_ACCESS_TOKEN`,
    /// `ESA_TEAM`, `ESA_API_BASE_URL`)
    pub fn from_env() -> Result<Self> {
        let config = crate::config::EnvConfig::load()?;
        let mut client = Self::new(config.access_token, config.team)?;
        client.base_url = config.base_url;
        Ok(client)
    }

    /// Define a equipe alvo
    pub fn set_team(&mut self, team: impl Into<String>) {
        self.team = team.into();
    }

    /// Define o parâmetro de paginação `page`
    pub fn set_page(&mut self, page: u32) {
        self.page = Some(page);
    }

    /// Remove o parâmetro de paginação
    pub fn clear_page(&mut self) {
        self.page = None;
    }

    /// Define o parâmetro de busca `q` (sintaxe de busca do esa.io)
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = Some(query.into());
    }

    /// Remove o parâmetro de busca
    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Substitui a URL base da API (útil para apontar em um mock server)
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Substitui o transporte HTTP por um `reqwest::Client` customizado
    pub fn set_http_client(&mut self, http_client: HttpClient) {
        self.http_client = http_client;
    }

    /// Obtém o token de acesso
    pub fn token(&self) -> &str {
        &self.access_token
    }

    /// Obtém o slug da equipe alvo
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Obtém a URL base da API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query string opcional (`page` / `q`) aplicada a toda requisição
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(ref query) = self.query {
            params.push(("q", query.clone()));
        }
        params
    }

    /// Helper unificado de envio: monta a URL, decora com autenticação e
    /// query params, envia e devolve o corpo já validado pelo status
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .bearer_auth(&self.access_token)
            .header("Content-Type", "application/json")
            .query(&self.query_params());

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Processa a resposta HTTP e trata erros
    ///
    /// Qualquer status fora de [200, 300) vira `ApiError`. O corpo é lido
    /// mesmo em erro: quando for JSON com `message`/`error`, essa mensagem
    /// acompanha o status.
    async fn handle_response(&self, response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let status_code = status.as_u16();
        tracing::error!("esa API error ({}): {}", status_code, body);

        let message = if let Ok(json) = serde_json::from_str::<Value>(&body) {
            json.get("message")
                .or_else(|| json.get("error"))
                .and_then(|v| v.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            body
        };

        Err(EsaError::ApiError {
            status: status_code,
            message,
        })
    }

    /// Executa uma requisição GET e parseia JSON
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.send(Method::GET, path, None::<&Value>).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Executa uma requisição POST com corpo JSON e parseia a resposta
    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self.send(Method::POST, path, Some(body)).await?;
        Ok(serde_json::from_str(&resp)?)
    }

    /// Executa uma requisição PATCH com corpo JSON e parseia a resposta
    pub(crate) async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self.send(Method::PATCH, path, Some(body)).await?;
        Ok(serde_json::from_str(&resp)?)
    }

    /// Executa uma requisição DELETE (a API responde 204 No Content)
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None::<&Value>).await?;
        Ok(())
    }
}
