/// OpenAPI documentation for Post Service
use crate::models::Post;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Post Service API",
        version = "1.0.0",
        description = "Read-only access to posts plus a static greeting endpoint.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    paths(
        crate::handlers::home::home,
        crate::handlers::posts::get_posts,
    ),
    components(schemas(Post)),
    tags(
        (name = "home", description = "Greeting"),
        (name = "posts", description = "Post retrieval"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_public_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/home"));
        assert!(doc.paths.paths.contains_key("/api/v1/posts"));
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.schemas.contains_key("Post")));
    }
}
