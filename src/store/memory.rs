//! In-process book store with the same contract as the PostgreSQL one.

use super::BookStore;
use crate::error::StoreError;
use crate::model::{Book, NewBook};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Book>,
}

/// Ids start at 1 and are never reused, matching a serial column.
#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn create(&self, book: NewBook) -> Result<Book, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.last_id += 1;
        let book = book.into_book(inner.last_id);
        inner.rows.insert(book.id, book.clone());
        Ok(book)
    }

    async fn list_all(&self) -> Result<Vec<Book>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Book, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        inner.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
