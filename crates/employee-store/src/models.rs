//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are kept apart from the domain types in employee-core so
//! column-level details stay here.

use chrono::NaiveDate;
use employee_core::{Employee, EmployeeId};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database row for the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub hire_date: Option<NaiveDate>,
    /// `NUMERIC(10, 2)`
    pub salary: Option<Decimal>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: EmployeeId::new(row.employee_id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            department: row.department,
            position: row.position,
            hire_date: row.hire_date,
            salary: row.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_employee() {
        let row = EmployeeRow {
            employee_id: 3,
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "janesmith@example.com".to_string(),
            phone: "9876543210".to_string(),
            department: "HR".to_string(),
            position: "Manager".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2018, 5, 15),
            salary: Some(Decimal::new(8_000_000, 2)),
        };

        let employee = Employee::from(row);
        assert_eq!(employee.employee_id, EmployeeId::new(3));
        assert_eq!(employee.department, "HR");
        assert_eq!(employee.salary.unwrap().to_string(), "80000.00");
    }
}
