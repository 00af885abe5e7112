//! Operações de posts (documentos) da equipe
//!
//! Todas as operações usam a equipe alvo do cliente. A listagem honra os
//! parâmetros `page` / `q` configurados via `set_page` / `set_query`.

use crate::client::EsaClient;
use crate::error::Result;
use crate::types::{Post, PostContent, PostData, Posts};

impl EsaClient {
    /// Lista os posts da equipe
    ///
    /// # Endpoint da API
    ///
    /// `GET /v1/teams/{team}/posts`
    ///
    /// # Retorno
    ///
    /// Uma página de posts; nas listagens a API omite os campos de detalhe
    /// (`kind`, contadores, `star`, `watch`).
    pub async fn get_posts(&self) -> Result<Posts> {
        let endpoint = format!("/teams/{}/posts", self.team());
        self.get_json(&endpoint).await
    }

    /// Obtém um post pelo número
    ///
    /// # Endpoint da API
    ///
    /// `GET /v1/teams/{team}/posts/{post_number}`
    pub async fn get_post(&self, post_number: u32) -> Result<Post> {
        let endpoint = format!("/teams/{}/posts/{}", self.team(), post_number);
        self.get_json(&endpoint).await
    }

    /// Cria um post na equipe
    ///
    /// # Endpoint da API
    ///
    /// `POST /v1/teams/{team}/posts`
    ///
    /// # Argumentos
    ///
    /// - `content`: payload de escrita (use `PostContent::new` + builders)
    ///
    /// # Retorno
    ///
    /// O post criado, com número, URL e timestamps atribuídos pela API.
    ///
    /// # Exemplo
    ///
    /// ```rust,ignore
    /// use esa::PostContent;
    ///
    /// let content = PostContent::new("hi!")
    ///     .with_body_md("# Getting Started\n")
    ///     .with_category("dev/2015/05/10")
    ///     .with_message("Add Getting Started section");
    /// let post = client.create_post(&content).await?;
    /// println!("Post criado: {}", post.url);
    /// ```
    pub async fn create_post(&self, content: &PostContent) -> Result<Post> {
        let endpoint = format!("/teams/{}/posts", self.team());
        let post: Post = self.post_json(&endpoint, &PostData { post: content }).await?;

        tracing::debug!("✅ Post {} criado", post.number);
        Ok(post)
    }

    /// Atualiza um post existente
    ///
    /// # Endpoint da API
    ///
    /// `PATCH /v1/teams/{team}/posts/{post_number}`
    ///
    /// # Argumentos
    ///
    /// - `post_number`: número do post a atualizar
    /// - `content`: payload de escrita; inclua `original_revision` para que
    ///   a API detecte conflitos com edições concorrentes
    ///
    /// # Retorno
    ///
    /// O post na versão resultante do update.
    pub async fn update_post(&self, post_number: u32, content: &PostContent) -> Result<Post> {
        let endpoint = format!("/teams/{}/posts/{}", self.team(), post_number);
        let post: Post = self.patch_json(&endpoint, &PostData { post: content }).await?;

        tracing::debug!("✅ Post {} atualizado", post_number);
        Ok(post)
    }

    /// Remove um post
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /v1/teams/{team}/posts/{post_number}`
    pub async fn delete_post(&self, post_number: u32) -> Result<()> {
        let endpoint = format!("/teams/{}/posts/{}", self.team(), post_number);
        self.delete(&endpoint).await?;

        tracing::debug!("✅ Post {} removido", post_number);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::EsaClient;
    use crate::types::{OriginalRevision, PostContent};
    use chrono::DateTime;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    // Fixtures de https://docs.esa.io/posts/102

    const POSTS_FIXTURE: &str = r##"
{
  "posts": [
    {
      "number": 1,
      "name": "hi!",
      "full_name": "日報/2015/05/09/hi! #api #dev",
      "wip": true,
      "body_md": "# Getting Started",
      "body_html": "<h1 id=\"1-0-0\" name=\"1-0-0\">\n<a class=\"anchor\" href=\"#1-0-0\"><i class=\"fa fa-link\"></i><span class=\"hidden\" data-text=\"Getting Started\"> &gt; Getting Started</span></a>Getting Started</h1>\n",
      "created_at": "2015-05-09T11:54:50+09:00",
      "message": "Add Getting Started section",
      "url": "https://docs.esa.io/posts/1",
      "updated_at": "2015-05-09T11:54:51+09:00",
      "tags": [
        "api",
        "dev"
      ],
      "category": "日報/2015/05/09",
      "revision_number": 1,
      "created_by": {
        "name": "Hiroaki Sano",
        "screen_name": "hiroakis",
        "icon": "http://img.esa.io/uploads/production/users/1/icon/thumb_m_402685a258cf2a33c1d6c13a89adec92.png"
      },
      "updated_by": {
        "name": "Hiroaki Sano",
        "screen_name": "hiroakis",
        "icon": "http://img.esa.io/uploads/production/users/1/icon/thumb_m_402685a258cf2a33c1d6c13a89adec92.png"
      }
    }
  ],
  "prev_page": null,
  "next_page": 1,
  "total_count": 1
}
"##;

    const POST_FIXTURE: &str = r##"
{
  "number": 1,
  "name": "hi!",
  "full_name": "日報/2015/05/09/hi! #api #dev",
  "wip": true,
  "body_md": "# Getting Started",
  "body_html": "<h1 id=\"1-0-0\" name=\"1-0-0\">\n<a class=\"anchor\" href=\"#1-0-0\"><i class=\"fa fa-link\"></i><span class=\"hidden\" data-text=\"Getting Started\"> &gt; Getting Started</span></a>Getting Started</h1>\n",
  "created_at": "2015-05-09T11:54:50+09:00",
  "message": "Add Getting Started section",
  "url": "https://docs.esa.io/posts/1",
  "updated_at": "2015-05-09T11:54:51+09:00",
  "tags": [
    "api",
    "dev"
  ],
  "category": "日報/2015/05/09",
  "revision_number": 1,
  "created_by": {
    "name": "Hiroaki Sano",
    "screen_name": "hiroakis",
    "icon": "http://img.esa.io/uploads/production/users/1/icon/thumb_m_402685a258cf2a33c1d6c13a89adec92.png"
  },
  "updated_by": {
    "name": "Hiroaki Sano",
    "screen_name": "hiroakis",
    "icon": "http://img.esa.io/uploads/production/users/1/icon/thumb_m_402685a258cf2a33c1d6c13a89adec92.png"
  },
  "kind": "flow",
  "comments_count": 1,
  "tasks_count": 1,
  "done_tasks_count": 1,
  "stargazers_count": 1,
  "watchers_count": 1,
  "star": true,
  "watch": true
}
"##;

    fn fake_client(server: &MockServer) -> EsaClient {
        let mut client = EsaClient::new("access-token", "docs").unwrap();
        client.set_base_url(server.base_url());
        client
    }

    fn sample_content() -> PostContent {
        PostContent::new("hi!")
            .with_body_md("# Getting Started\n")
            .with_tags(vec!["api".to_string(), "dev".to_string()])
            .with_category("dev/2015/05/10")
            .with_wip(false)
            .with_message("Add Getting Started section")
    }

    #[tokio::test]
    async fn test_get_posts() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/teams/docs/posts");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(POSTS_FIXTURE);
            })
            .await;

        let posts = fake_client(&server).get_posts().await.unwrap();
        mock.assert_async().await;

        assert_eq!(posts.posts.len(), 1);
        let post = &posts.posts[0];
        assert_eq!(post.number, 1);
        assert_eq!(post.name, "hi!");
        assert_eq!(post.full_name, "日報/2015/05/09/hi! #api #dev");
        assert!(post.wip);
        assert_eq!(post.body_md, "# Getting Started");
        assert_eq!(
            post.body_html,
            "<h1 id=\"1-0-0\" name=\"1-0-0\">\n<a class=\"anchor\" href=\"#1-0-0\"><i class=\"fa fa-link\"></i><span class=\"hidden\" data-text=\"Getting Started\"> &gt; Getting Started</span></a>Getting Started</h1>\n"
        );
        assert_eq!(
            post.created_at,
            DateTime::parse_from_rfc3339("2015-05-09T11:54:50+09:00").unwrap()
        );
        assert_eq!(
            post.updated_at,
            DateTime::parse_from_rfc3339("2015-05-09T11:54:51+09:00").unwrap()
        );
        assert_eq!(post.message, "Add Getting Started section");
        assert_eq!(post.url, "https://docs.esa.io/posts/1");
        assert_eq!(post.tags, vec!["api".to_string(), "dev".to_string()]);
        assert_eq!(post.category, "日報/2015/05/09");
        assert_eq!(post.revision_number, 1);
        assert_eq!(post.created_by.name, "Hiroaki Sano");
        assert_eq!(post.created_by.screen_name, "hiroakis");
        assert_eq!(post.updated_by.screen_name, "hiroakis");

        // Campos de detalhe ausentes na listagem assumem o padrão
        assert_eq!(post.kind, "");
        assert_eq!(post.comments_count, 0);
        assert!(!post.star);
        assert!(!post.watch);

        assert_eq!(posts.prev_page, None);
        assert_eq!(posts.next_page, Some(1));
        assert_eq!(posts.total_count, 1);
    }

    #[tokio::test]
    async fn test_get_post() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/teams/docs/posts/1");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(POST_FIXTURE);
            })
            .await;

        let post = fake_client(&server).get_post(1).await.unwrap();
        mock.assert_async().await;

        assert_eq!(post.number, 1);
        assert_eq!(post.name, "hi!");
        assert_eq!(post.kind, "flow");
        assert_eq!(post.comments_count, 1);
        assert_eq!(post.tasks_count, 1);
        assert_eq!(post.done_tasks_count, 1);
        assert_eq!(post.stargazers_count, 1);
        assert_eq!(post.watchers_count, 1);
        assert!(post.star);
        assert!(post.watch);
        assert_eq!(
            post.created_at,
            DateTime::parse_from_rfc3339("2015-05-09T11:54:50+09:00").unwrap()
        );
    }

    #[tokio::test]
    async fn test_create_post() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/teams/docs/posts").json_body(json!({
                    "post": {
                        "name": "hi!",
                        "body_md": "# Getting Started\n",
                        "tags": ["api", "dev"],
                        "category": "dev/2015/05/10",
                        "wip": false,
                        "message": "Add Getting Started section"
                    }
                }));
                then.status(201)
                    .header("content-type", "application/json")
                    .body(POST_FIXTURE);
            })
            .await;

        let post = fake_client(&server)
            .create_post(&sample_content())
            .await
            .unwrap();
        mock.assert_async().await;

        assert_eq!(post.number, 1);
        assert_eq!(post.name, "hi!");
        assert_eq!(post.url, "https://docs.esa.io/posts/1");
        assert_eq!(post.revision_number, 1);
    }

    #[tokio::test]
    async fn test_update_post() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/teams/docs/posts/1")
                    .json_body(json!({
                        "post": {
                            "name": "hi!",
                            "body_md": "# Getting Started\n",
                            "tags": ["api", "dev"],
                            "category": "dev/2015/05/10",
                            "wip": false,
                            "message": "Add Getting Started section",
                            "original_revision": {
                                "body_md": "# Getting ...",
                                "number": 1,
                                "user": "hiroakis"
                            }
                        }
                    }));
                then.status(200)
                    .header("content-type", "application/json")
                    .body(POST_FIXTURE);
            })
            .await;

        let content = sample_content().with_original_revision(OriginalRevision {
            body_md: "# Getting ...".to_string(),
            number: 1,
            user: "hiroakis".to_string(),
        });

        let post = fake_client(&server).update_post(1, &content).await.unwrap();
        mock.assert_async().await;

        assert_eq!(post.number, 1);
        assert_eq!(post.name, "hi!");
        assert_eq!(
            post.updated_at,
            DateTime::parse_from_rfc3339("2015-05-09T11:54:51+09:00").unwrap()
        );
    }

    #[tokio::test]
    async fn test_delete_post() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/teams/docs/posts/1");
                then.status(204);
            })
            .await;

        fake_client(&server).delete_post(1).await.unwrap();
        mock.assert_async().await;
    }
}
