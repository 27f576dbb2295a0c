//! The record store interface.
//!
//! Handlers talk to storage only through [`EmployeeRepository`], so the
//! PostgreSQL backend ([`crate::Store`]) and the in-memory backend
//! ([`crate::MemoryStore`]) are interchangeable.

use async_trait::async_trait;
use employee_core::{Employee, EmployeeId, EmployeePatch, NewEmployee};

use crate::error::StoreResult;

/// Persistence operations for employee records.
///
/// Every operation is atomic for the single row it touches. Concurrent
/// updates to the same row are last-write-wins.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Stores a new employee and returns it with its assigned identifier.
    async fn create(&self, employee: NewEmployee) -> StoreResult<Employee>;

    /// Fetches one employee.
    ///
    /// Returns `StoreError::EmployeeNotFound` if the identifier is unknown.
    async fn get(&self, id: EmployeeId) -> StoreResult<Employee>;

    /// Merges `patch` into an existing employee and returns the result.
    ///
    /// Returns `StoreError::EmployeeNotFound` if the identifier is unknown.
    async fn update(&self, id: EmployeeId, patch: EmployeePatch) -> StoreResult<Employee>;

    /// Permanently removes an employee.
    ///
    /// Returns `StoreError::EmployeeNotFound` if the identifier is unknown,
    /// including when it was already deleted.
    async fn delete(&self, id: EmployeeId) -> StoreResult<()>;

    /// Every employee, ordered by identifier.
    async fn list(&self) -> StoreResult<Vec<Employee>>;

    /// Short name of the backend, for logs and health output.
    fn backend(&self) -> &'static str;
}
