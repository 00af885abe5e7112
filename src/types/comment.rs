//! Comment types do esa.io

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::Author;

/// Representa um comentário de um post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// ID do comentário (único no serviço)
    pub id: u32,

    /// Corpo em Markdown
    pub body_md: String,

    /// Corpo renderizado em HTML
    pub body_html: String,

    /// Data de criação (RFC 3339, offset preservado)
    pub created_at: DateTime<FixedOffset>,

    /// Data de última atualização (RFC 3339, offset preservado)
    pub updated_at: DateTime<FixedOffset>,

    /// URL pública do comentário
    pub url: String,

    /// Autor do comentário
    pub created_by: Author,
}

/// Página de comentários retornada por `GET /teams/{team}/posts/{n}/comments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comments {
    pub comments: Vec<Comment>,

    /// Página anterior (None na primeira página)
    pub prev_page: Option<u32>,

    /// Próxima página (None na última página)
    pub next_page: Option<u32>,

    pub total_count: u32,
}

/// Payload de escrita de um comentário (create/update)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentContent {
    /// Corpo em Markdown
    pub body_md: String,
}

/// Envelope de escrita: a API espera `{"comment": {...}}`
#[derive(Debug, Serialize)]
pub(crate) struct CommentData<'a> {
    pub comment: &'a CommentContent,
}

impl CommentContent {
    /// Cria um payload de comentário
    pub fn new(body_md: impl Into<String>) -> Self {
        Self {
            body_md: body_md.into(),
        }
    }
}
