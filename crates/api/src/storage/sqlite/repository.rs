//! SQLite repository implementation.
//!
//! Implements the repository trait from `todo_core::storage` using SQLite.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use todo_core::storage::{Entity, Repository, RepositoryError, Result};
use todo_core::todo::TodoItem;

use super::conversions::{bool_to_sql, row_to_todo_item, TodoItemRow};
use super::error::{map_connect_error, map_sqlx_error};
use super::schema;

const ENTITY: &str = TodoItem::ENTITY_TYPE;

/// SQLite-based repository implementation.
///
/// Holds a connection pool; each operation borrows a connection for the
/// lifetime of its statement.
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Creates a new repository for the given database URL.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically. In-memory URLs are routed to
    /// [`SqliteRepository::new_in_memory`].
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        if is_in_memory_url(url) {
            return Self::new_in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(url)
            .map_err(map_connect_error)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(map_connect_error)?;

        Self::from_pool(pool).await
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Every pooled connection to `:memory:` opens its own database, so the
    /// pool is pinned to a single connection that is never recycled. Data is
    /// lost when the repository is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(map_connect_error)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(map_connect_error)?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, creating the schema if needed.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(schema::CREATE_TABLES)
            .execute(&pool)
            .await
            .map_err(map_connect_error)?;

        Ok(Self { pool })
    }
}

fn is_in_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[async_trait]
impl Repository<TodoItem> for SqliteRepository {
    async fn get_all(&self) -> Result<Vec<TodoItem>> {
        let rows = sqlx::query_as::<_, TodoItemRow>(schema::SELECT_ALL_TODO_ITEMS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, ENTITY, 0))?;

        Ok(rows.into_iter().map(row_to_todo_item).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<TodoItem>> {
        let row = sqlx::query_as::<_, TodoItemRow>(schema::SELECT_TODO_ITEM_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, ENTITY, id))?;

        Ok(row.map(row_to_todo_item))
    }

    async fn add(&self, item: &TodoItem) -> Result<TodoItem> {
        let result = sqlx::query(schema::INSERT_TODO_ITEM)
            .bind(&item.name)
            .bind(bool_to_sql(item.is_complete))
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, ENTITY, item.id))?;

        Ok(TodoItem {
            id: result.last_insert_rowid(),
            ..item.clone()
        })
    }

    async fn update(&self, item: &TodoItem) -> Result<()> {
        let result = sqlx::query(schema::UPDATE_TODO_ITEM)
            .bind(item.id)
            .bind(&item.name)
            .bind(bool_to_sql(item.is_complete))
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, ENTITY, item.id))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(ENTITY, item.id));
        }
        Ok(())
    }

    async fn delete(&self, item: &TodoItem) -> Result<()> {
        let result = sqlx::query(schema::DELETE_TODO_ITEM)
            .bind(item.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, ENTITY, item.id))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(ENTITY, item.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_repo() -> SqliteRepository {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.add(&TodoItem::new("Item1")).await.unwrap();
        repo.add(&TodoItem::new("Item2")).await.unwrap();
        repo
    }

    #[test]
    fn test_is_in_memory_url() {
        assert!(is_in_memory_url("sqlite::memory:"));
        assert!(is_in_memory_url("sqlite://todo.db?mode=memory"));
        assert!(!is_in_memory_url("sqlite://todo.db"));
    }

    #[tokio::test]
    async fn test_new_with_memory_url_keeps_data_between_calls() {
        let repo = SqliteRepository::new("sqlite::memory:", 5).await.unwrap();

        repo.add(&TodoItem::new("Item1")).await.unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let items = repo.get_all().await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_returns_seeded_items() {
        let repo = seeded_repo().await;

        let items = repo.get_all().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], TodoItem::new("Item1").with_id(1));
        assert_eq!(items[1], TodoItem::new("Item2").with_id(2));
    }

    #[tokio::test]
    async fn test_get_all_is_stable_without_mutation() {
        let repo = seeded_repo().await;

        let first = repo.get_all().await.unwrap();
        let second = repo.get_all().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_add_ignores_client_id() {
        let repo = seeded_repo().await;

        let created = repo
            .add(&TodoItem::new("Client picked").with_id(99))
            .await
            .unwrap();

        assert_eq!(created.id, 3);
        assert!(repo.get(99).await.unwrap().is_none());
        assert_eq!(repo.get(3).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = seeded_repo().await;
        let second = repo.get(2).await.unwrap().unwrap();

        repo.delete(&second).await.unwrap();
        let created = repo.add(&TodoItem::new("Item3")).await.unwrap();

        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = seeded_repo().await;

        let result = repo.get(42).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = seeded_repo().await;
        let mut item = repo.get(1).await.unwrap().unwrap();

        item.name = "Renamed".to_string();
        item.is_complete = true;
        repo.update(&item).await.unwrap();

        let retrieved = repo.get(1).await.unwrap().unwrap();
        assert_eq!(retrieved, TodoItem::new("Renamed").with_id(1).completed());
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = seeded_repo().await;

        let result = repo.update(&TodoItem::new("Ghost").with_id(42)).await;

        assert_eq!(result, Err(RepositoryError::not_found("TodoItem", 42)));
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let repo = seeded_repo().await;
        let item = repo.get(1).await.unwrap().unwrap();

        repo.delete(&item).await.unwrap();

        assert!(repo.get(1).await.unwrap().is_none());
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let repo = seeded_repo().await;

        let result = repo.delete(&TodoItem::new("Ghost").with_id(42)).await;

        assert_eq!(result, Err(RepositoryError::not_found("TodoItem", 42)));
    }

    #[tokio::test]
    async fn test_not_null_violation_maps_to_invalid_data() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let err = sqlx::query("INSERT INTO todo_items (name, is_complete) VALUES (NULL, 0)")
            .execute(&repo.pool)
            .await
            .unwrap_err();

        let mapped = map_sqlx_error(err, ENTITY, 0);
        assert!(matches!(mapped, RepositoryError::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_unique_violation_maps_to_already_exists() {
        let repo = seeded_repo().await;

        let err = sqlx::query("INSERT INTO todo_items (id, name) VALUES (1, 'Duplicate')")
            .execute(&repo.pool)
            .await
            .unwrap_err();

        let mapped = map_sqlx_error(err, ENTITY, 1);
        assert_eq!(
            mapped,
            RepositoryError::AlreadyExists {
                entity_type: "TodoItem",
                id: 1
            }
        );
    }

    #[tokio::test]
    async fn test_closed_pool_maps_to_connection_failed() {
        let repo = seeded_repo().await;
        repo.pool.close().await;

        let result = repo.get_all().await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }
}
