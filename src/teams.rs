//! Operações de equipe: teams, stats e members

use crate::client::EsaClient;
use crate::error::Result;
use crate::types::{Members, Stats, Team, Teams};

impl EsaClient {
    /// Lista as equipes acessíveis pelo token
    ///
    /// # Endpoint da API
    ///
    /// `GET /v1/teams`
    pub async fn get_teams(&self) -> Result<Teams> {
        self.get_json("/teams").await
    }

    /// Obtém a equipe alvo do cliente
    ///
    /// # Endpoint da API
    ///
    /// `GET /v1/teams/{team}`
    pub async fn get_team(&self) -> Result<Team> {
        let endpoint = format!("/teams/{}", self.team());
        self.get_json(&endpoint).await
    }

    /// Obtém as estatísticas da equipe (contadores agregados)
    ///
    /// # Endpoint da API
    ///
    /// `GET /v1/teams/{team}/stats`
    pub async fn get_stats(&self) -> Result<Stats> {
        let endpoint = format!("/teams/{}/stats", self.team());
        self.get_json(&endpoint).await
    }

    /// Lista os membros da equipe
    ///
    /// # Endpoint da API
    ///
    /// `GET /v1/teams/{team}/members`
    pub async fn get_members(&self) -> Result<Members> {
        let endpoint = format!("/teams/{}/members", self.team());
        self.get_json(&endpoint).await
    }
}
