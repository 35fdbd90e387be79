//! Employee API Handlers

use axum::{Json, extract::State};
use shared::models::{EmployeeRequest, EmployeeResponse};

use crate::core::ServerState;
use crate::utils::{AppResult, ValidatedJson, ValidatedPath};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employees.get_all_employees().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.get_employee_by_id(id).await?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.create_employee(payload).await?;
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employees.update_employee(id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee (200, empty body)
pub async fn delete(State(state): State<ServerState>, ValidatedPath(id): ValidatedPath<i64>) -> AppResult<()> {
    state.employees.delete_employee(id).await?;
    Ok(())
}
