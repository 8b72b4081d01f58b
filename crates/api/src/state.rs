//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only ever see the repository trait object; the
//! concrete backend is chosen by feature flags in the factory functions below.

use std::sync::Arc;

use todo_core::storage::Repository;
use todo_core::todo::TodoItem;

/// Shared application state.
///
/// This is cloned for each request handler. Cloning is cheap: the repository
/// is reference counted and holds no per-request state.
#[derive(Clone)]
pub struct AppState {
    /// Todo item repository.
    pub todo_repo: Arc<dyn Repository<TodoItem>>,
}

impl AppState {
    /// Creates an AppState around an already constructed repository.
    pub fn with_repository(todo_repo: Arc<dyn Repository<TodoItem>>) -> Self {
        Self { todo_repo }
    }
}

// ============================================================================
// Factory functions for the different storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::config::Config;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo =
                SqliteRepository::new(&config.database_url, config.database_max_connections)
                    .await?;

            tracing::info!(
                url = %config.database_url,
                max_connections = config.database_max_connections,
                "Opened SQLite storage"
            );

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::config::Config;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for running without any external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage, data will not be persisted");

            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::inmemory::InMemoryRepository;

    impl Default for AppState {
        /// Creates an AppState with empty in-memory storage for testing.
        fn default() -> Self {
            Self::with_repository(Arc::new(InMemoryRepository::new()))
        }
    }
}
