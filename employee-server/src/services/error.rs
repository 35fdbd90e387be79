//! Service-layer error type
//!
//! `ServiceError` sits between the repository (`RepoError`) and the API layer
//! (`AppError`) so handlers can propagate with `?`.

use axum::response::IntoResponse;
use shared::error::AppError;
use thiserror::Error;

use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Employee {0} not found")]
    EmployeeNotFound(i64),

    #[error("Department {0} not found")]
    DepartmentNotFound(i64),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::EmployeeNotFound(id) => AppError::employee_not_found(id),
            ServiceError::DepartmentNotFound(id) => AppError::department_not_found(id),
            ServiceError::Repository(RepoError::Constraint(msg)) => {
                tracing::warn!(error = %msg, "Rejected by store constraint");
                AppError::validation(msg)
            }
            ServiceError::Repository(RepoError::NotFound(id)) => AppError::employee_not_found(id),
            ServiceError::Repository(RepoError::Database(msg)) => AppError::database(msg),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
