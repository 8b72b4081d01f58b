use serde::Deserialize;

use todo_core::todo::TodoItem;

/// Request payload for creating or replacing a todo item.
///
/// `id` is accepted so clients can send back an item they fetched, but it
/// is never trusted: the store assigns ids on create and the path id wins
/// on update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoItemPayload {
    /// Converts the create request into a not yet persisted TodoItem.
    pub fn into_todo_item(self) -> TodoItem {
        TodoItem {
            id: 0,
            name: self.name,
            is_complete: self.is_complete,
        }
    }

    /// Replaces every mutable field of an existing item.
    pub fn apply_to(self, item: &mut TodoItem) {
        item.name = self.name;
        item.is_complete = self.is_complete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> TodoItemPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_into_todo_item_drops_client_id() {
        let item = payload(r#"{ "id": 1, "name": "Test Item" }"#).into_todo_item();

        assert_eq!(item, TodoItem::new("Test Item"));
    }

    #[test]
    fn test_apply_to_replaces_all_fields() {
        let mut item = TodoItem::new("Old").with_id(4).completed();

        payload(r#"{ "name": "New" }"#).apply_to(&mut item);

        assert_eq!(item, TodoItem::new("New").with_id(4));
    }

    #[test]
    fn test_apply_to_keeps_existing_id() {
        let mut item = TodoItem::new("Old").with_id(4);

        payload(r#"{ "id": 9, "name": "New", "isComplete": true }"#).apply_to(&mut item);

        assert_eq!(item.id, 4);
        assert!(item.is_complete);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_str::<TodoItemPayload>(r#"{ "isComplete": true }"#);

        assert!(result.is_err());
    }
}
