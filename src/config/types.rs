//! Runtime configuration read from the environment.

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::net::SocketAddr;

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Connection parameters for the PostgreSQL database.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db_name: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.db_name)
            .ssl_mode(self.ssl_mode)
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db: DbConfig,
    pub server_addr: SocketAddr,
    /// Request bodies larger than this are rejected before reaching handlers.
    pub body_limit_bytes: usize,
}
