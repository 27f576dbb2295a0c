//! employee-core: Domain types for the employee records API
//!
//! This crate provides:
//! - The `Employee` record and the validated shapes used to create and
//!   update it
//! - Field-by-field payload validation with accumulated errors
//! - The response envelope every endpoint returns
//! - Page-number pagination of list results
//!
//! Nothing here performs I/O; the store and server crates build on it.

pub mod envelope;
pub mod pagination;
pub mod types;
pub mod validation;

pub use envelope::{DEFAULT_SUB_CODE, Envelope, EnvelopeErrors};
pub use pagination::{Page, PageLinks, PageRequest, PaginationConfig, Paginator};
pub use types::{Employee, EmployeeId, EmployeePatch, NewEmployee};
pub use validation::{FieldErrors, validate_create, validate_update};
