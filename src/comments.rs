//! Operações de comentários de posts
//!
//! A listagem é por post; get/update/delete usam o ID global do comentário.

use crate::client::EsaClient;
use crate::error::Result;
use crate::types::{Comment, CommentContent, CommentData, Comments};

impl EsaClient {
    /// Lista os comentários de um post
    ///
    /// # Endpoint da API
    ///
    /// `GET /v1/teams/{team}/posts/{post_number}/comments`
    pub async fn get_comments(&self, post_number: u32) -> Result<Comments> {
        let endpoint = format!("/teams/{}/posts/{}/comments", self.team(), post_number);
        self.get_json(&endpoint).await
    }

    /// Obtém um comentário pelo ID
    ///
    /// # Endpoint da API
    ///
    /// `GET /v1/teams/{team}/comments/{comment_id}`
    pub async fn get_comment(&self, comment_id: u32) -> Result<Comment> {
        let endpoint = format!("/teams/{}/comments/{}", self.team(), comment_id);
        self.get_json(&endpoint).await
    }

    /// Cria um comentário em um post
    ///
    /// # Endpoint da API
    ///
    /// `POST /v1/teams/{team}/posts/{post_number}/comments`
    ///
    /// # Argumentos
    ///
    /// - `post_number`: número do post comentado
    /// - `content`: payload com o corpo em Markdown
    pub async fn create_comment(
        &self,
        post_number: u32,
        content: &CommentContent,
    ) -> Result<Comment> {
        let endpoint = format!("/teams/{}/posts/{}/comments", self.team(), post_number);
        let comment: Comment = self
            .post_json(&endpoint, &CommentData { comment: content })
            .await?;

        tracing::debug!("✅ Comentário {} criado no post {}", comment.id, post_number);
        Ok(comment)
    }

    /// Atualiza um comentário existente
    ///
    /// # Endpoint da API
    ///
    /// `PATCH /v1/teams/{team}/comments/{comment_id}`
    pub async fn update_comment(
        &self,
        comment_id: u32,
        content: &CommentContent,
    ) -> Result<Comment> {
        let endpoint = format!("/teams/{}/comments/{}", self.team(), comment_id);
        let comment: Comment = self
            .patch_json(&endpoint, &CommentData { comment: content })
            .await?;

        tracing::debug!("✅ Comentário {} atualizado", comment_id);
        Ok(comment)
    }

    /// Remove um comentário
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /v1/teams/{team}/comments/{comment_id}`
    pub async fn delete_comment(&self, comment_id: u32) -> Result<()> {
        let endpoint = format!("/teams/{}/comments/{}", self.team(), comment_id);
        self.delete(&endpoint).await?;

        tracing::debug!("✅ Comentário {} removido", comment_id);
        Ok(())
    }
}
