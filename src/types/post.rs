//! Post types do esa.io
//!
//! Estrutura completa de um post (documento) do esa.io, incluindo os campos
//! de leitura retornados pela API v1 e o payload de escrita aceito em
//! create/update.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::Author;

/// Representa um post completo do esa.io
///
/// As listagens (`GET /teams/{team}/posts`) omitem os campos de detalhe
/// (`kind`, contadores, `star`, `watch`); eles assumem o valor padrão.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    // ==================== IDENTIFICAÇÃO ====================
    /// Número do post (único por equipe)
    pub number: u32,

    /// Título do post
    pub name: String,

    /// Título completo, com categoria e tags (ex.: "dev/2015/05/09/hi! #api")
    pub full_name: String,

    /// Post marcado como WIP (Work In Progress)?
    pub wip: bool,

    // ==================== CONTEÚDO ====================
    /// Corpo em Markdown
    pub body_md: String,

    /// Corpo renderizado em HTML
    pub body_html: String,

    /// Mensagem da última revisão
    pub message: String,

    /// Tags do post
    pub tags: Vec<String>,

    /// Categoria do post
    pub category: String,

    /// Número da revisão atual
    pub revision_number: u32,

    // ==================== DATAS & AUTORIA ====================
    /// Data de criação (RFC 3339, offset preservado)
    pub created_at: DateTime<FixedOffset>,

    /// Data de última atualização (RFC 3339, offset preservado)
    pub updated_at: DateTime<FixedOffset>,

    /// Autor da criação
    pub created_by: Author,

    /// Autor da última atualização
    pub updated_by: Author,

    /// URL pública do post
    pub url: String,

    // ==================== DETALHE (ausentes em listagens) ====================
    /// Tipo do post: "stock" ou "flow"
    #[serde(default)]
    pub kind: String,

    /// Número de comentários
    #[serde(default)]
    pub comments_count: u32,

    /// Número de tarefas (checkboxes) no corpo
    #[serde(default)]
    pub tasks_count: u32,

    /// Número de tarefas concluídas
    #[serde(default)]
    pub done_tasks_count: u32,

    /// Número de stars
    #[serde(default)]
    pub stargazers_count: u32,

    /// Número de watchers
    #[serde(default)]
    pub watchers_count: u32,

    /// O usuário autenticado deu star?
    #[serde(default)]
    pub star: bool,

    /// O usuário autenticado está assistindo?
    #[serde(default)]
    pub watch: bool,
}

/// Página de posts retornada por `GET /teams/{team}/posts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posts {
    pub posts: Vec<Post>,

    /// Página anterior (None na primeira página)
    pub prev_page: Option<u32>,

    /// Próxima página (None na última página)
    pub next_page: Option<u32>,

    pub total_count: u32,
}

/// Payload de escrita de um post (create/update)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostContent {
    /// Título do post
    pub name: String,

    /// Corpo em Markdown
    pub body_md: String,

    /// Tags do post
    pub tags: Vec<String>,

    /// Categoria do post
    pub category: String,

    /// Criar/manter como WIP?
    pub wip: bool,

    /// Mensagem de revisão
    pub message: String,

    /// Revisão de origem, para detecção de conflito em updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_revision: Option<OriginalRevision>,

    /// Número de um post template a aplicar na criação
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_post_id: Option<u32>,
}

/// Revisão sobre a qual um update foi escrito
///
/// Quando enviada, a API gera um aviso de conflito se o post tiver sido
/// alterado por outro usuário desde essa revisão.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginalRevision {
    /// Corpo em Markdown da revisão original
    pub body_md: String,

    /// Número da revisão original
    pub number: u32,

    /// Screen name do autor da revisão original
    pub user: String,
}

/// Envelope de escrita: a API espera `{"post": {...}}`
#[derive(Debug, Serialize)]
pub(crate) struct PostData<'a> {
    pub post: &'a PostContent,
}

impl PostContent {
    /// Cria um payload com os campos mínimos
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body_md: String::new(),
            tags: Vec::new(),
            category: String::new(),
            wip: false,
            message: String::new(),
            original_revision: None,
            template_post_id: None,
        }
    }

    /// Builder: define o corpo em Markdown
    pub fn with_body_md(mut self, body_md: impl Into<String>) -> Self {
        self.body_md = body_md.into();
        self
    }

    /// Builder: define as tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder: define a categoria
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder: marca ou desmarca como WIP
    pub fn with_wip(mut self, wip: bool) -> Self {
        self.wip = wip;
        self
    }

    /// Builder: define a mensagem de revisão
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Builder: define a revisão de origem (updates com detecção de conflito)
    pub fn with_original_revision(mut self, revision: OriginalRevision) -> Self {
        self.original_revision = Some(revision);
        self
    }

    /// Builder: aplica um post template na criação
    pub fn with_template_post_id(mut self, template_post_id: u32) -> Self {
        self.template_post_id = Some(template_post_id);
        self
    }
}
