/// Database access layer
///
/// Repository trait for posts and its PostgreSQL implementation.
pub mod post_repo;

pub use post_repo::{PgPostRepository, PostRepository};
