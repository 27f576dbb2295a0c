//! Employee resource.
//!
//! Implements the five operations under `/api/employees/`:
//! - GET /api/employees/ - Paginated list
//! - POST /api/employees/ - Create
//! - GET /api/employees/{id}/ - Retrieve
//! - PUT /api/employees/{id}/ - Partial or full update
//! - DELETE /api/employees/{id}/ - Delete

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, body::Bytes, http::StatusCode};
use employee_core::validation::parse_body;
use employee_core::{
    Employee, EmployeeId, Envelope, Page, PageLinks, Paginator, validate_create, validate_update,
};
use employee_store::EmployeeRepository;

use crate::error::{ApiError, ApiResult};
use crate::resource::{Reply, ResourceHandler, resource_routes};
use crate::state::AppState;

/// Collection path of the employee resource.
pub const EMPLOYEES_PATH: &str = "/api/employees/";

/// Handles employee requests against a record store.
pub struct EmployeeHandler {
    repository: Arc<dyn EmployeeRepository>,
    paginator: Paginator,
}

impl EmployeeHandler {
    pub fn new(repository: Arc<dyn EmployeeRepository>, paginator: Paginator) -> Self {
        Self {
            repository,
            paginator,
        }
    }
}

#[async_trait]
impl ResourceHandler for EmployeeHandler {
    type Record = Employee;
    type Id = EmployeeId;

    const NAME: &'static str = "Employee";

    async fn list(
        &self,
        params: Vec<(String, String)>,
        links: PageLinks,
    ) -> ApiResult<Reply<Page<Employee>>> {
        let request = self.paginator.request(&params);
        let employees = self.repository.list().await?;
        let envelope = self.paginator.paginate(employees, request, &links);

        if let Some(page) = &envelope.data {
            tracing::info!(
                total = page.total,
                count = page.count,
                page = request.page,
                page_size = request.page_size,
                "Listed employees"
            );
        }

        Ok(Reply::ok(envelope))
    }

    async fn create(&self, body: Bytes) -> ApiResult<Reply<Employee>> {
        let new_employee = parse_body(&body)
            .and_then(|payload| validate_create(&payload))
            .map_err(|errors| ApiError::creation_failed(Self::NAME, errors))?;

        let employee = self.repository.create(new_employee).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create employee");
            ApiError::Store(e)
        })?;

        tracing::info!(
            employee_id = %employee.employee_id,
            email = %employee.email,
            "Employee created"
        );

        Ok(Reply::new(
            StatusCode::CREATED,
            Envelope::success("Employee created successfully", 201, employee),
        ))
    }

    async fn retrieve(&self, id: EmployeeId) -> ApiResult<Reply<Employee>> {
        let employee = self.repository.get(id).await?;

        Ok(Reply::ok(Envelope::success(
            "Employee retrieved successfully",
            200,
            employee,
        )))
    }

    async fn update(&self, id: EmployeeId, body: Bytes) -> ApiResult<Reply<Employee>> {
        // A missing employee wins over an invalid body.
        self.repository.get(id).await?;

        let patch = parse_body(&body)
            .and_then(|payload| validate_update(&payload))
            .map_err(|errors| ApiError::update_failed(Self::NAME, errors))?;

        let employee = self.repository.update(id, patch).await?;

        tracing::info!(employee_id = %id, "Employee updated");

        Ok(Reply::ok(Envelope::success(
            "Employee updated successfully",
            200,
            employee,
        )))
    }

    async fn delete(&self, id: EmployeeId) -> ApiResult<Reply<()>> {
        self.repository.delete(id).await?;

        tracing::info!(employee_id = %id, "Employee deleted");

        Ok(Reply::new(
            StatusCode::NO_CONTENT,
            Envelope::empty("Employee deleted successfully", 204),
        ))
    }
}

/// Build employee routes.
pub fn routes(state: &AppState) -> Router<AppState> {
    let paginator = Paginator::new(state.config().pagination);
    let handler = Arc::new(EmployeeHandler::new(state.repository(), paginator));
    resource_routes(EMPLOYEES_PATH, handler)
}
