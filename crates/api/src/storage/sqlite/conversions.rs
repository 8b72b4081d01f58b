//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use todo_core::todo::TodoItem;

/// Row shape returned by the todo item SELECT queries.
///
/// Columns: id, name, is_complete
pub type TodoItemRow = (i64, String, i64);

/// Convert a SQLite row to a TodoItem.
pub fn row_to_todo_item((id, name, is_complete): TodoItemRow) -> TodoItem {
    TodoItem {
        id,
        name,
        is_complete: is_complete != 0,
    }
}

/// SQLite has no boolean storage class; flags are stored as 0/1.
pub fn bool_to_sql(value: bool) -> i64 {
    i64::from(value)
}
