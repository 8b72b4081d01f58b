use async_trait::async_trait;

use super::Result;

/// A record type that can be stored in a [`Repository`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human readable type name used in error messages.
    const ENTITY_TYPE: &'static str;

    /// Store-assigned identifier of this record.
    fn id(&self) -> i64;
}

/// CRUD operations over a collection of entities.
///
/// "Not found" on reads is reported as `Ok(None)`, never as an error.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Gets every record in the store.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Gets a record by its ID.
    async fn get(&self, id: i64) -> Result<Option<T>>;

    /// Inserts a new record and returns it with its assigned ID.
    ///
    /// Any ID already set on `item` is ignored.
    async fn add(&self, item: &T) -> Result<T>;

    /// Replaces the mutable fields of an existing record.
    async fn update(&self, item: &T) -> Result<()>;

    /// Deletes an existing record.
    async fn delete(&self, item: &T) -> Result<()>;
}
