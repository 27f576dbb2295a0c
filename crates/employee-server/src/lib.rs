//! employee-server: HTTP API server for employee records
//!
//! This crate provides:
//! - REST endpoints to list, create, retrieve, update and delete employees
//! - A uniform response envelope for success and failure alike
//! - Page-number pagination with absolute `next`/`previous` links
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error envelopes
//!
//! # Usage
//!
//! ```rust,ignore
//! use employee_server::{AppState, ServerConfig, build_app};
//!
//! let config = ServerConfig::from_env()?;
//! let app = build_app(AppState::in_memory(config))?;
//! axum::serve(listener, app).await?;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod resource;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::build_app;
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use employee_core;
pub use employee_store;
