//! Persistence contract for books and its implementations.

mod memory;
pub(crate) mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

use crate::error::StoreError;
use crate::model::{Book, NewBook};
use async_trait::async_trait;

/// All reads and writes of the books table go through this trait.
#[async_trait]
pub trait BookStore: Send + Sync + 'static {
    /// Insert a book and return it with its assigned id.
    async fn create(&self, book: NewBook) -> Result<Book, StoreError>;

    /// Every stored book ordered by id. Empty when none exist.
    async fn list_all(&self) -> Result<Vec<Book>, StoreError>;

    /// The book with `id`, or [`StoreError::NotFound`].
    async fn find_by_id(&self, id: i64) -> Result<Book, StoreError>;

    /// Remove the book with `id`. Returns false when no row matched.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Parse a path identifier. Never touches the store.
pub fn parse_id(raw: &str) -> Result<i64, StoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(StoreError::InvalidInput("id cannot be empty".into()));
    }
    raw.parse()
        .map_err(|_| StoreError::InvalidInput(format!("invalid id '{}'", raw)))
}
