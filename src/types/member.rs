//! Membros de uma equipe

use serde::{Deserialize, Serialize};

/// Representa um membro da equipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Nome de exibição
    pub name: String,

    /// Screen name (handle)
    pub screen_name: String,

    /// URL do ícone/avatar
    pub icon: String,

    /// Email do membro
    pub email: String,
}

/// Página de membros retornada por `GET /teams/{team}/members`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Members {
    pub members: Vec<Member>,

    /// Página anterior (None na primeira página)
    pub prev_page: Option<u32>,

    /// Próxima página (None na última página)
    pub next_page: Option<u32>,

    pub total_count: u32,
}
