/// Post service - read access to stored posts
use crate::db::PostRepository;
use crate::error::Result;
use crate::models::Post;
use std::sync::Arc;

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Get all posts exactly as the repository returns them
    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        let posts = self.repo.find_all().await?;
        tracing::debug!(count = posts.len(), "loaded posts");
        Ok(posts)
    }
}
