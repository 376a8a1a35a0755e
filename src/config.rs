use std::{env, str::FromStr};

use anyhow::Context;

const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;
const DEFAULT_CONCURRENCY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Required by the API server only.
    pub jwt_secret: Option<String>,
    /// Origins allowed by CORS. Empty means any origin.
    pub cors_origins: Vec<String>,
    pub body_limit: usize,
    pub concurrency_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        Ok(Self {
            database_url,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10),
            host: env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_or("APP_PORT", 3000),
            jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            body_limit: env_or("APP_BODY_LIMIT", DEFAULT_BODY_LIMIT),
            concurrency_limit: env_or("APP_CONCURRENCY_LIMIT", DEFAULT_CONCURRENCY_LIMIT),
        })
    }
}

/// Reads `key` and parses it, falling back to `default` when unset or unparsable.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Comma separated origin list, blanks dropped.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_skipped() {
        assert_eq!(
            parse_origins(" https://example.com/ ,, http://localhost:5173"),
            vec!["https://example.com", "http://localhost:5173"]
        );
        assert!(parse_origins(" , ").is_empty());
    }
}
