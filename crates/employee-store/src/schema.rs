//! Schema definitions and migration utilities.
//!
//! The SQL lives in `migrations/` at the workspace root and is embedded at
//! compile time.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the employees table (001_employees.sql).
pub const EMPLOYEES_MIGRATION: &str = include_str!("../../../migrations/001_employees.sql");

/// Run all migrations against the database.
///
/// Idempotent: every statement checks for existing objects first.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running employees migration (001_employees.sql)...");
    sqlx::raw_sql(EMPLOYEES_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Employees migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `employees` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'employees'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
