//! Employee Model

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::Department;

/// Employee entity (one row of the `employee` table)
///
/// `id` is `None` until the row has been saved for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: Option<i64>,
    pub name: String,
    pub position: Option<String>,
    /// Monetary units, never negative
    pub salary: i64,
    pub department_id: Option<i64>,
}

impl Employee {
    /// Unsaved entity with the given name and salary
    pub fn new(name: impl Into<String>, salary: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            position: None,
            salary,
            department_id: None,
        }
    }

    /// Build a new (unsaved) entity from a create request
    pub fn from_request(request: EmployeeRequest) -> Self {
        let mut employee = Self::new(String::new(), 0);
        employee.apply_request(request);
        employee
    }

    /// Overwrite every mutable field with the request values
    pub fn apply_request(&mut self, request: EmployeeRequest) {
        self.name = request.name;
        self.position = request.position;
        self.salary = request.salary;
        self.department_id = request.department_id;
    }
}

/// Create / update employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[validate(
        length(min = 1, code = "employee_name_empty", message = "name must not be empty"),
        custom(function = "not_blank")
    )]
    pub name: String,
    pub position: Option<String>,
    #[validate(range(
        min = 0,
        code = "employee_salary_negative",
        message = "salary must not be negative"
    ))]
    pub salary: i64,
    pub department_id: Option<i64>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("employee_name_empty");
        err.message = Some("name must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Employee response with resolved department display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub salary: i64,
    pub department_code: Option<String>,
    pub department_head: Option<String>,
}

impl EmployeeResponse {
    /// Map a persisted employee (and its department, if any) to the API shape
    pub fn from_entity(id: i64, employee: Employee, department: Option<&Department>) -> Self {
        Self {
            id,
            name: employee.name,
            position: employee.position,
            salary: employee.salary,
            department_code: department.map(|d| d.code.clone()),
            department_head: department.and_then(|d| d.head_name.clone()),
        }
    }
}
