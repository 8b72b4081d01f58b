//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository trait
//! that keeps all items in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. It is
//! used for tests and for running the server without a database file.
//!
//! # Example
//!
//! ```rust,ignore
//! use todo_api::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
