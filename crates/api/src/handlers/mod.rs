pub mod error;
pub mod health;
pub mod todo_items;

pub use error::AppError;
