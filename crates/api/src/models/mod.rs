mod todo_item;

pub use todo_item::TodoItemPayload;
