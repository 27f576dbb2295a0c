//! Core data types for employee records.
//!
//! The store hands out [`Employee`] values; the validation layer produces
//! [`NewEmployee`] (for create) and [`EmployeePatch`] (for update). Keeping
//! the three shapes apart means an identifier can only ever come from the
//! store, never from a request body.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ============================================================================
// ID Types
// ============================================================================

/// Store-assigned identifier of an employee.
///
/// Identifiers are positive integers handed out in increasing order and are
/// never reused, even after the record they named is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    /// Wraps a raw database identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ============================================================================
// Employee
// ============================================================================

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub hire_date: Option<NaiveDate>,
    /// Always carries two decimal places, serialized as a string (`"55000.00"`).
    pub salary: Option<Decimal>,
}

impl Employee {
    /// Merges the provided fields of `patch` into this record.
    ///
    /// Fields absent from the patch are left untouched; `employee_id` is
    /// never changed.
    pub fn apply(&mut self, patch: EmployeePatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(hire_date) = patch.hire_date {
            self.hire_date = hire_date;
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A validated employee that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub salary: Option<Decimal>,
}

impl NewEmployee {
    /// Attaches the store-assigned identifier.
    pub fn into_employee(self, employee_id: EmployeeId) -> Employee {
        Employee {
            employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            department: self.department,
            position: self.position,
            hire_date: self.hire_date,
            salary: self.salary,
        }
    }
}

/// A validated partial update.
///
/// `None` means "leave unchanged". For the nullable columns the inner
/// `Option` distinguishes "set to null" from "set to a value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<Option<NaiveDate>>,
    pub salary: Option<Option<Decimal>>,
}

impl EmployeePatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ============================================================================
// Tests
// ============================================================================
