//! Functional core for the todo API.
//!
//! Holds the entity type, the repository contract and the pure error
//! mappings. Nothing in this crate performs I/O.

pub mod storage;
pub mod todo;
