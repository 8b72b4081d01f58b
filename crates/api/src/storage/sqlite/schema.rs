//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the todo items table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todo_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    is_complete INTEGER NOT NULL DEFAULT 0
)
"#;

pub const SELECT_ALL_TODO_ITEMS: &str = r#"
SELECT id, name, is_complete
FROM todo_items
ORDER BY id ASC
"#;

pub const SELECT_TODO_ITEM_BY_ID: &str = r#"
SELECT id, name, is_complete
FROM todo_items
WHERE id = ?1
"#;

pub const INSERT_TODO_ITEM: &str = r#"
INSERT INTO todo_items (name, is_complete)
VALUES (?1, ?2)
"#;

pub const UPDATE_TODO_ITEM: &str = r#"
UPDATE todo_items
SET name = ?2, is_complete = ?3
WHERE id = ?1
"#;

pub const DELETE_TODO_ITEM: &str = r#"
DELETE FROM todo_items
WHERE id = ?1
"#;
