/// Home handler - static greeting
use actix_web::HttpResponse;

pub const GREETING: &str = "안녕";

/// Greet the caller
#[utoipa::path(
    get,
    path = "/api/home",
    tag = "home",
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(GREETING)
}
