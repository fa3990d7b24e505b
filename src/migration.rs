//! Schema migration for the books table. Run once at startup before serving.

use crate::error::StoreError;
use crate::store::postgres::BOOKS_TABLE;
use sqlx::PgPool;

/// Create the books table if it does not exist. Idempotent.
pub async fn migrate_books(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            author TEXT NOT NULL DEFAULT '',
            title TEXT NOT NULL DEFAULT '',
            publisher TEXT NOT NULL DEFAULT ''
        )
        "#,
        BOOKS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = BOOKS_TABLE, "books table ready");
    Ok(())
}
