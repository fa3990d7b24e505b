//! Load [`AppConfig`] from environment variables (optionally seeded from `.env`).

use crate::config::types::*;
use crate::config::validator::{parse_addr, parse_port, parse_positive, parse_ssl_mode};
use crate::error::ConfigError;

/// Read `.env` if present, then the process environment.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(ConfigError::Invalid {
                key: ".env",
                reason: e.to_string(),
            });
        }
    }
    load_with(|key| std::env::var(key).ok())
}

/// Build config from an arbitrary key lookup.
pub fn load_with<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

    let db = DbConfig {
        host: required("DB_HOST")?,
        port: parse_port("DB_PORT", &required("DB_PORT")?)?,
        user: required("DB_USER")?,
        password: required("DB_PASS")?,
        db_name: required("DB_NAME")?,
        ssl_mode: parse_ssl_mode("DB_SSLMODE", &required("DB_SSLMODE")?)?,
        max_connections: match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => parse_positive("DB_MAX_CONNECTIONS", &v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        },
    };
    if db.host.trim().is_empty() {
        return Err(ConfigError::Invalid {
            key: "DB_HOST",
            reason: "must not be empty".into(),
        });
    }
    if db.db_name.trim().is_empty() {
        return Err(ConfigError::Invalid {
            key: "DB_NAME",
            reason: "must not be empty".into(),
        });
    }

    let server_addr = parse_addr(
        "SERVER_ADDR",
        &lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.into()),
    )?;
    let body_limit_bytes = match lookup("BODY_LIMIT_BYTES") {
        Some(v) => parse_positive("BODY_LIMIT_BYTES", &v)?,
        None => DEFAULT_BODY_LIMIT_BYTES,
    };

    Ok(AppConfig {
        db,
        server_addr,
        body_limit_bytes,
    })
}
