//! Estatísticas de uma equipe

use serde::{Deserialize, Serialize};

/// Contadores agregados retornados por `GET /teams/{team}/stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub members: u32,
    pub posts: u32,
    pub comments: u32,
    pub stars: u32,
    pub daily_active_users: u32,
    pub weekly_active_users: u32,
    pub monthly_active_users: u32,
}
