//! employee-store: Storage layer for employee records
//!
//! This crate provides:
//! - The `EmployeeRepository` interface used by the HTTP handlers
//! - A PostgreSQL implementation (`Store`) via sqlx
//! - An in-memory implementation (`MemoryStore`) for development and tests
//! - Embedded schema migration
//!
//! # Usage
//!
//! ```rust,ignore
//! use employee_store::{EmployeeRepository, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let created = store.create(new_employee).await?;
//! let everyone = store.list().await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::EmployeeRow;
pub use repository::EmployeeRepository;
pub use store::{Store, StoreConfig};

// Re-export employee-core for downstream crates
pub use employee_core;
