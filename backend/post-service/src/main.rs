use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use db_pool::create_pool;
use post_service::config::{Config, CorsConfig};
use post_service::db::PgPostRepository;
use post_service::handlers::{self, HealthState};
use post_service::middleware::MetricsMiddleware;
use post_service::openapi::ApiDoc;
use post_service::services::PostService;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const SERVICE_NAME: &str = "post-service";

async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> actix_web::Result<HttpResponse> {
    let body = serde_json::to_string(&*doc).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();
    for origin in config.origins() {
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(3600)
}

fn init_tracing() {
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

/// Call the local health endpoint; used as the container healthcheck.
async fn run_healthcheck() -> io::Result<()> {
    let port = Config::from_env().map(|c| c.app.port).unwrap_or(8080);
    let url = format!("http://127.0.0.1:{}/api/v1/health", port);

    match reqwest::Client::new().get(&url).send().await {
        Ok(resp) if resp.status().is_success() => Ok(()),
        Ok(resp) => {
            eprintln!("healthcheck HTTP status: {}", resp.status());
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"))
        }
        Err(e) => {
            eprintln!("healthcheck HTTP error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"))
        }
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
                return;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
            }
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Post Service
///
/// # Routes
///
/// - `GET /api/home` - Fixed greeting
/// - `GET /api/v1/posts` - All stored posts
/// - `/api/v1/health`, `/api/v1/health/ready`, `/api/v1/health/live` - Health checks
/// - `/api/v1/openapi.json`, `/swagger-ui/` - API documentation
/// - `/metrics` - Prometheus exposition
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("WARN: failed to load .env: {}", e);
        }
    }

    // Support container healthchecks via CLI subcommand: `healthcheck-http` or legacy `healthcheck`
    if let Some(cmd) = std::env::args().nth(1) {
        if cmd == "healthcheck" || cmd == "healthcheck-http" {
            return run_healthcheck().await;
        }
    }

    init_tracing();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Configuration loading failed: {}", e);
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Failed to load configuration: {e}"),
        )
    })?;

    tracing::info!("Starting {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let db_cfg = config.database.pool_config(SERVICE_NAME);
    db_cfg.log_config();
    let db_pool = create_pool(db_cfg).await.map_err(|e| {
        tracing::error!("Database pool creation failed: {:#}", e);
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to create database pool: {e}"),
        )
    })?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .map_err(|e| {
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to run database migrations: {e}"),
                )
            })?;
        tracing::info!("Database migrations applied");
    }

    let post_repo = Arc::new(PgPostRepository::new(db_pool.clone()));
    let post_service = web::Data::new(PostService::new(post_repo));
    let health_state = web::Data::new(HealthState::new(db_pool.clone()));
    let openapi_doc = ApiDoc::openapi();

    let http_bind_address = config.app.bind_address();
    tracing::info!("Starting HTTP server at {}", http_bind_address);

    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(openapi_doc.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url(ApiDoc::openapi_json_path(), openapi_doc.clone()),
            )
            .route(ApiDoc::openapi_json_path(), web::get().to(openapi_json))
            .app_data(post_service.clone())
            .app_data(health_state.clone())
            .wrap(build_cors(&cors_config))
            .wrap(MetricsMiddleware)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/metrics", web::get().to(post_service::metrics::serve_metrics))
            .configure(handlers::configure_health)
            .configure(handlers::configure)
    })
    .bind(&http_bind_address)?
    .workers(config.app.workers)
    .shutdown_timeout(30)
    .run();

    let server_handle = server.handle();

    let result = tokio::select! {
        res = server => res,
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            Ok(())
        }
    };

    db_pool.close().await;
    tracing::info!("{} shutting down", SERVICE_NAME);

    result
}
