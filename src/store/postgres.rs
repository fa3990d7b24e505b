//! PostgreSQL-backed book store.

use super::BookStore;
use crate::error::StoreError;
use crate::model::{Book, NewBook};
use async_trait::async_trait;
use sqlx::PgPool;

pub const BOOKS_TABLE: &str = "books";

#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        PgBookStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create(&self, book: NewBook) -> Result<Book, StoreError> {
        let sql = format!(
            "INSERT INTO {} (author, title, publisher) VALUES ($1, $2, $3) RETURNING id, author, title, publisher",
            BOOKS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(&book.author)
            .bind(&book.title)
            .bind(&book.publisher)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<Book>, StoreError> {
        let sql = format!(
            "SELECT id, author, title, publisher FROM {} ORDER BY id",
            BOOKS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Book, StoreError> {
        let sql = format!(
            "SELECT id, author, title, publisher FROM {} WHERE id = $1",
            BOOKS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", BOOKS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
