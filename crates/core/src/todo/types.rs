use serde::{Deserialize, Serialize};

use crate::storage::Entity;

/// A single todo entry.
///
/// `id` is assigned by the store when the item is first persisted. Items
/// that have not been stored yet carry an id of `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoItem {
    /// Creates a new, not yet persisted, incomplete item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            is_complete: false,
        }
    }

    /// Sets a specific ID for this item (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Marks the item as complete.
    pub fn completed(mut self) -> Self {
        self.is_complete = true;
        self
    }

    /// Returns true if the store has assigned an id to this item.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

impl Entity for TodoItem {
    const ENTITY_TYPE: &'static str = "TodoItem";

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_not_persisted() {
        let item = TodoItem::new("Buy milk");

        assert_eq!(item.id, 0);
        assert!(!item.is_complete);
        assert!(!item.is_persisted());
    }

    #[test]
    fn test_with_id_marks_item_persisted() {
        let item = TodoItem::new("Buy milk").with_id(7);

        assert!(item.is_persisted());
        assert_eq!(Entity::id(&item), 7);
    }

    #[test]
    fn test_serializes_camel_case() {
        let item = TodoItem::new("Item1").with_id(1).completed();

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Item1", "isComplete": true })
        );
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let item: TodoItem = serde_json::from_str(r#"{ "name": "Walk dog" }"#).unwrap();

        assert_eq!(item, TodoItem::new("Walk dog"));
    }
}
