//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todo_core::storage::{Entity, Repository, RepositoryError, Result};
use todo_core::todo::TodoItem;

/// In-memory storage backend.
///
/// Items live in a `BTreeMap` keyed by id, so listing returns them in
/// ascending id order like the SQLite backend. Ids come from a counter that
/// never goes backwards, so deleted ids are not reused.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<BTreeMap<i64, TodoItem>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl Repository<TodoItem> for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn add(&self, item: &TodoItem) -> Result<TodoItem> {
        let mut items = self.items.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = TodoItem {
            id,
            ..item.clone()
        };
        items.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, item: &TodoItem) -> Result<()> {
        let mut items = self.items.write().await;
        let Some(existing) = items.get_mut(&item.id) else {
            return Err(RepositoryError::not_found(TodoItem::ENTITY_TYPE, item.id));
        };
        existing.name = item.name.clone();
        existing.is_complete = item.is_complete;
        Ok(())
    }

    async fn delete(&self, item: &TodoItem) -> Result<()> {
        let mut items = self.items.write().await;
        if items.remove(&item.id).is_none() {
            return Err(RepositoryError::not_found(TodoItem::ENTITY_TYPE, item.id));
        }
        Ok(())
    }
}
