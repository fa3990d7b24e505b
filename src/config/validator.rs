//! Value parsing and validation for environment settings.

use crate::error::ConfigError;
use sqlx::postgres::PgSslMode;
use std::net::SocketAddr;

pub fn parse_port(key: &'static str, raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(0) => Err(ConfigError::Invalid {
            key,
            reason: "port must be non-zero".into(),
        }),
        Ok(p) => Ok(p),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

/// Accepts the libpq sslmode names.
pub fn parse_ssl_mode(key: &'static str, raw: &str) -> Result<PgSslMode, ConfigError> {
    raw.trim().parse::<PgSslMode>().map_err(|_| ConfigError::Invalid {
        key,
        reason: format!(
            "unknown sslmode '{}' (expected disable, allow, prefer, require, verify-ca or verify-full)",
            raw
        ),
    })
}

pub fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let n: T = raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })?;
    if n <= T::default() {
        return Err(ConfigError::Invalid {
            key,
            reason: "must be at least 1".into(),
        });
    }
    Ok(n)
}

pub fn parse_addr(key: &'static str, raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_bounds() {
        assert_eq!(parse_port("DB_PORT", "5432").unwrap(), 5432);
        assert!(parse_port("DB_PORT", "0").is_err());
        assert!(parse_port("DB_PORT", "70000").is_err());
        assert!(parse_port("DB_PORT", "pg").is_err());
    }

    #[test]
    fn ssl_modes() {
        assert!(matches!(
            parse_ssl_mode("DB_SSLMODE", "disable").unwrap(),
            PgSslMode::Disable
        ));
        assert!(matches!(
            parse_ssl_mode("DB_SSLMODE", "verify-full").unwrap(),
            PgSslMode::VerifyFull
        ));
        assert!(parse_ssl_mode("DB_SSLMODE", "sometimes").is_err());
    }

    #[test]
    fn positive_numbers() {
        assert_eq!(parse_positive::<u32>("DB_MAX_CONNECTIONS", "8").unwrap(), 8);
        assert!(parse_positive::<u32>("DB_MAX_CONNECTIONS", "0").is_err());
        assert!(parse_positive::<usize>("BODY_LIMIT_BYTES", "-1").is_err());
    }
}
