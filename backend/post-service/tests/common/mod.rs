#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use post_service::db::PostRepository;
use post_service::models::Post;

/// Repository that returns a fixed list of posts.
pub struct StaticPostRepository {
    posts: Vec<Post>,
}

impl StaticPostRepository {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl PostRepository for StaticPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, sqlx::Error> {
        Ok(self.posts.clone())
    }
}

/// Repository whose backing store is always unreachable.
pub struct UnavailablePostRepository;

#[async_trait]
impl PostRepository for UnavailablePostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

pub fn sample_post(id: i64, title: &str) -> Post {
    let ts = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap() + chrono::Duration::minutes(id);
    Post {
        id,
        title: title.to_string(),
        content: format!("content of {title}"),
        created_at: ts,
        updated_at: ts,
    }
}

/// Deliberately not in id order, so ordering tests catch any re-sorting.
pub fn sample_posts() -> Vec<Post> {
    vec![
        sample_post(2, "second"),
        sample_post(1, "first"),
        sample_post(3, "third"),
    ]
}
