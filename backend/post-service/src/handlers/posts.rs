/// Post handlers - HTTP endpoints for post operations
use crate::error::Result;
use crate::models::Post;
use crate::services::PostService;
use actix_web::{web, HttpResponse};

/// List all posts
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All stored posts", body = Vec<Post>),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn get_posts(service: web::Data<PostService>) -> Result<HttpResponse> {
    let posts = service.get_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}
