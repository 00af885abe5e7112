//! Cliente da API v1 do esa.io
//!
//! Este crate fornece uma interface tipada para o serviço de documentação
//! esa.io, cobrindo os recursos da API v1:
//!
//! - **Teams**: listar equipes, obter a equipe alvo, estatísticas e membros
//! - **Posts**: CRUD completo de documentos
//! - **Comments**: CRUD completo de comentários
//!
//! Toda requisição leva o header `Authorization: Bearer <token>` e, quando
//! configurados no cliente, os parâmetros de query `page` (paginação) e `q`
//! (sintaxe de busca do esa.io).
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use esa::{EsaClient, PostContent};
//!
//! #[tokio::main]
//! async fn main() -> esa::Result<()> {
//!     // IMPORTANTE: Ler de variáveis de ambiente (NUNCA hardcode!)
//!     let access_token = std::env::var("ESA_ACCESS_TOKEN")
//!         .expect("ESA_ACCESS_TOKEN não configurado");
//!
//!     let mut client = EsaClient::new(access_token, "docs")?;
//!
//!     // Busca paginada de posts WIP
//!     client.set_page(1);
//!     client.set_query("wip:true");
//!     let posts = client.get_posts().await?;
//!     println!("{} posts no total", posts.total_count);
//!
//!     // Criação de um post
//!     let content = PostContent::new("hi!")
//!         .with_body_md("# Getting Started\n")
//!         .with_category("dev/2015/05/10")
//!         .with_message("Add Getting Started section");
//!     let post = client.create_post(&content).await?;
//!     println!("Post criado: {}", post.url);
//!
//!     Ok(())
//! }
//! ```

// Módulos públicos
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Operações por recurso (impl blocks do EsaClient)
mod comments;
mod posts;
mod teams;

// Re-exports principais
pub use client::{EsaClient, ESA_API_V1};
pub use config::EnvConfig;
pub use error::{EsaError, Result};
pub use types::{
    Author, Comment, CommentContent, Comments, Member, Members, OriginalRevision, Post,
    PostContent, Posts, Stats, Team, Teams,
};
