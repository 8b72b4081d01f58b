mod types;

pub use types::TodoItem;
