//! In-memory record store.
//!
//! Used when no database is configured and by the server's tests. Records
//! live in a `BTreeMap` so listing is naturally ordered by identifier.

use std::collections::BTreeMap;

use async_trait::async_trait;
use employee_core::{Employee, EmployeeId, EmployeePatch, NewEmployee};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::repository::EmployeeRepository;

#[derive(Debug, Default)]
struct Inner {
    employees: BTreeMap<EmployeeId, Employee>,
    /// Last identifier handed out. Never decreases, so deleted
    /// identifiers are not reused.
    last_id: i64,
}

/// Employee store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored employees.
    pub async fn len(&self) -> usize {
        self.inner.read().await.employees.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn create(&self, employee: NewEmployee) -> StoreResult<Employee> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = EmployeeId::new(inner.last_id);

        let employee = employee.into_employee(id);
        inner.employees.insert(id, employee.clone());

        tracing::debug!(employee_id = %id, "Inserted employee into memory store");
        Ok(employee)
    }

    async fn get(&self, id: EmployeeId) -> StoreResult<Employee> {
        self.inner
            .read()
            .await
            .employees
            .get(&id)
            .cloned()
            .ok_or(StoreError::EmployeeNotFound(id))
    }

    async fn update(&self, id: EmployeeId, patch: EmployeePatch) -> StoreResult<Employee> {
        let mut inner = self.inner.write().await;
        let employee = inner
            .employees
            .get_mut(&id)
            .ok_or(StoreError::EmployeeNotFound(id))?;

        employee.apply(patch);
        Ok(employee.clone())
    }

    async fn delete(&self, id: EmployeeId) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .employees
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::EmployeeNotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.inner.read().await.employees.values().cloned().collect())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
