/// Business logic layer for post-service
pub mod posts;

pub use posts::PostService;
