//! Application state shared across handlers.

use std::sync::Arc;

use employee_store::{EmployeeRepository, MemoryStore};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Employee record store.
    repository: Arc<dyn EmployeeRepository>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(repository: Arc<dyn EmployeeRepository>, config: ServerConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self::new(Arc::new(MemoryStore::new()), config)
    }

    /// Get a handle to the employee store.
    pub fn repository(&self) -> Arc<dyn EmployeeRepository> {
        Arc::clone(&self.repository)
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.repository.backend())
            .field("config", &self.config)
            .finish()
    }
}
