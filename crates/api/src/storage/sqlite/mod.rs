//! SQLite storage backend implementation.
//!
//! Every repository call checks a connection out of a `sqlx::SqlitePool`
//! and hands it back when the call finishes.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
