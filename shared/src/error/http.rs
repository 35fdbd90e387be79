//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::EmployeeNotFound | Self::DepartmentNotFound => {
                StatusCode::NOT_FOUND
            }

            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // Validation and malformed input
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::EmployeeNameEmpty
            | Self::EmployeeSalaryNegative => StatusCode::BAD_REQUEST,
        }
    }
}
