//! Environment variable parsing utilities

use std::str::FromStr;

/// Parse an environment variable with a default fallback
///
/// Missing and unparseable values both yield `default`.
///
/// # Example
/// ```ignore
/// let timeout: u64 = parse_env_with_default("DB_ACQUIRE_TIMEOUT_SECS", 10);
/// ```
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
