//! Tipos da API v1 do esa.io
//!
//! Este módulo contém as estruturas de dados type-safe trocadas com a API:
//!
//! - **Team / Stats / Member**: recursos de equipe
//! - **Post**: documentos, com payload de escrita `PostContent`
//! - **Comment**: comentários, com payload de escrita `CommentContent`
//! - **Author**: usuário resumido embutido em posts e comentários
//!
//! As listagens paginadas (`Teams`, `Members`, `Posts`, `Comments`) carregam
//! `prev_page` / `next_page` / `total_count` ao lado do array de itens.

pub mod author;
pub mod comment;
pub mod member;
pub mod post;
pub mod stats;
pub mod team;

// Re-exports principais para facilitar uso
pub use author::Author;
pub use comment::{Comment, CommentContent, Comments};
pub use member::{Member, Members};
pub use post::{OriginalRevision, Post, PostContent, Posts};
pub use stats::Stats;
pub use team::{Team, Teams};

pub(crate) use comment::CommentData;
pub(crate) use post::PostData;
