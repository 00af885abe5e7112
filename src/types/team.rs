//! Tipos de equipe do esa.io

use serde::{Deserialize, Serialize};

/// Representa uma equipe do esa.io
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Slug da equipe (subdomínio)
    pub name: String,

    /// Visibilidade: "open" ou "closed"
    pub privacy: String,

    /// Descrição da equipe
    pub description: String,

    /// URL do ícone da equipe
    pub icon: String,

    /// URL pública da equipe
    pub url: String,
}

/// Página de equipes retornada por `GET /teams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub teams: Vec<Team>,

    /// Página anterior (None na primeira página)
    pub prev_page: Option<u32>,

    /// Próxima página (None na última página)
    pub next_page: Option<u32>,

    pub total_count: u32,
}
