//! Book store server: loads config from env, connects to PostgreSQL, migrates the books table, serves the API.

use book_store::{app, load_from_env, migrate_books, AppState, PgBookStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("book_store=info,tower_http=info")),
        )
        .init();

    let config = load_from_env()?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.db.max_connections)
        .connect_with(config.db.connect_options())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, host = %config.db.host, "could not connect to database");
            e
        })?;

    migrate_books(&pool).await.map_err(|e| {
        tracing::error!(error = %e, "could not migrate");
        e
    })?;

    let state = AppState::new(Arc::new(PgBookStore::new(pool)));
    let router = app(state, config.body_limit_bytes);

    let listener = TcpListener::bind(config.server_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
