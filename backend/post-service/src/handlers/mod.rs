/// HTTP handlers for post-service endpoints
///
/// - Home: fixed greeting
/// - Posts: read-all listing
/// - Health: liveness, readiness and summary checks
pub mod health;
pub mod home;
pub mod posts;

pub use health::{configure_health, HealthState};
pub use home::{home, GREETING};
pub use posts::get_posts;

use actix_web::web;

/// Register the public API routes on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/home").route(web::get().to(home)))
        .service(web::resource("/api/v1/posts").route(web::get().to(get_posts)));
}
