/// Configuration management for Post Service
///
/// Values come from environment variables; an optional `.env` file is
/// loaded by `main` before `Config::from_env` runs.
use db_pool::{max_connections_override, DbConfig as DbPoolConfig};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Number of actix worker threads
    pub workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
    /// Apply embedded migrations on startup
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

impl DatabaseConfig {
    /// Pool settings for `service_name`
    ///
    /// The `DB_*` knobs always apply. A valid `DB_MAX_CONNECTIONS` sizes the
    /// pool directly; otherwise `max_connections` from this config does.
    pub fn pool_config(&self, service_name: &str) -> DbPoolConfig {
        let mut pool = DbPoolConfig::tuning_from_env(service_name);
        pool.database_url = self.url.clone();

        if max_connections_override().is_none() {
            pool.max_connections = self.max_connections.max(1);
        }
        pool.min_connections = pool.min_connections.min(pool.max_connections);

        pool
    }
}

impl CorsConfig {
    /// Trimmed, non-empty origins.
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let production = app_env.eq_ignore_ascii_case("production");

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("POST_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or_default("POST_SERVICE_PORT", 8080)?,
                workers: parse_env_or_default("POST_SERVICE_WORKERS", 4)?,
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if production => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if production && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/posts".to_string()),
                max_connections: parse_env_or_default("DATABASE_MAX_CONNECTIONS", 10)?,
                run_migrations: parse_env_or_default("DATABASE_RUN_MIGRATIONS", true)?,
            },
        })
    }
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "APP_ENV",
        "POST_SERVICE_HOST",
        "POST_SERVICE_PORT",
        "POST_SERVICE_WORKERS",
        "CORS_ALLOWED_ORIGINS",
        "DATABASE_URL",
        "DATABASE_MAX_CONNECTIONS",
        "DATABASE_RUN_MIGRATIONS",
        "DB_MAX_CONNECTIONS",
        "DB_MIN_CONNECTIONS",
        "DB_ACQUIRE_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_empty() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.app.workers, 4);
        assert_eq!(config.cors.allowed_origins, "http://localhost:3000");
        assert_eq!(config.database.url, "postgres://localhost/posts");
        assert_eq!(config.database.max_connections, 10);
        assert!(config.database.run_migrations);
    }

    #[test]
    #[serial]
    fn overrides_are_read_from_env() {
        clear_env();
        std::env::set_var("POST_SERVICE_PORT", "9090");
        std::env::set_var("DATABASE_RUN_MIGRATIONS", "false");
        std::env::set_var("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example");

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.port, 9090);
        assert!(!config.database.run_migrations);
        assert_eq!(
            config.cors.origins().collect::<Vec<_>>(),
            vec!["https://a.example", "https://b.example"]
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_number_is_rejected() {
        clear_env();
        std::env::set_var("POST_SERVICE_PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();

        assert!(err.contains("POST_SERVICE_PORT"));
        clear_env();
    }

    #[test]
    #[serial]
    fn production_requires_explicit_cors_origins() {
        clear_env();
        std::env::set_var("APP_ENV", "production");
        assert!(Config::from_env().is_err());

        std::env::set_var("CORS_ALLOWED_ORIGINS", "*");
        assert!(Config::from_env().is_err());

        std::env::set_var("CORS_ALLOWED_ORIGINS", "https://app.example");
        assert!(Config::from_env().unwrap().app.is_production());
        clear_env();
    }

    #[test]
    #[serial]
    fn pool_config_uses_service_ceiling_by_default() {
        clear_env();

        let pool = Config::from_env().unwrap().database.pool_config("post-service");

        assert_eq!(pool.service_name, "post-service");
        assert_eq!(pool.database_url, "postgres://localhost/posts");
        assert_eq!(pool.max_connections, 10);
        assert_eq!(pool.min_connections, 5);
    }

    #[test]
    #[serial]
    fn pool_config_reads_db_knobs_without_database_url() {
        clear_env();
        std::env::set_var("DB_MAX_CONNECTIONS", "5");
        std::env::set_var("DB_MIN_CONNECTIONS", "2");
        std::env::set_var("DB_ACQUIRE_TIMEOUT_SECS", "3");

        let pool = Config::from_env().unwrap().database.pool_config("post-service");

        assert_eq!(pool.database_url, "postgres://localhost/posts");
        assert_eq!(pool.max_connections, 5);
        assert_eq!(pool.min_connections, 2);
        assert_eq!(pool.acquire_timeout_secs, 3);
        clear_env();
    }

    #[test]
    #[serial]
    fn pool_config_falls_back_to_service_ceiling_on_invalid_db_max() {
        for raw in ["0", "many"] {
            clear_env();
            std::env::set_var("DB_MAX_CONNECTIONS", raw);
            std::env::set_var("DATABASE_MAX_CONNECTIONS", "7");

            let pool = Config::from_env().unwrap().database.pool_config("post-service");

            assert_eq!(pool.max_connections, 7, "DB_MAX_CONNECTIONS={raw}");
        }
        clear_env();
    }

    #[test]
    #[serial]
    fn pool_config_keeps_min_within_small_ceiling() {
        clear_env();
        std::env::set_var("DATABASE_MAX_CONNECTIONS", "3");

        let pool = Config::from_env().unwrap().database.pool_config("post-service");

        assert_eq!(pool.max_connections, 3);
        assert_eq!(pool.min_connections, 3);
        clear_env();
    }
}
