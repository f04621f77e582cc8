use crate::models::Post;
use async_trait::async_trait;
use sqlx::PgPool;

/// Storage access for posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every stored post, in storage order.
    async fn find_all(&self) -> Result<Vec<Post>, sqlx::Error>;
}

/// Find all posts, oldest id first
pub async fn find_all_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, created_at, updated_at
        FROM posts
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, sqlx::Error> {
        find_all_posts(&self.pool).await
    }
}
