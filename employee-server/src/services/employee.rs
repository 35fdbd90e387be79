//! Employee Service
//!
//! Request/response mapping and the business rules that sit above the
//! repository: ids must exist, referenced departments must exist.

use std::collections::HashMap;
use std::sync::Arc;

use shared::models::{Department, Employee, EmployeeRequest, EmployeeResponse};

use super::error::{ServiceError, ServiceResult};
use crate::db::repository::{DepartmentLookup, EmployeeRepository, RepoError};

#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentLookup>,
}

impl EmployeeService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentLookup>,
    ) -> Self {
        Self {
            employees,
            departments,
        }
    }

    /// All employees ordered by id
    pub async fn get_all_employees(&self) -> ServiceResult<Vec<EmployeeResponse>> {
        let employees = self.employees.find_all().await?;

        // 同一部门只查一次
        let mut departments: HashMap<i64, Option<Department>> = HashMap::new();
        let mut responses = Vec::with_capacity(employees.len());
        for employee in employees {
            if let Some(dept_id) = employee.department_id
                && !departments.contains_key(&dept_id)
            {
                let department = self.departments.find_by_id(dept_id).await?;
                departments.insert(dept_id, department);
            }
            let department = employee
                .department_id
                .and_then(|dept_id| departments.get(&dept_id))
                .and_then(Option::as_ref);
            responses.push(Self::to_response(employee, department)?);
        }

        tracing::debug!(count = responses.len(), "Listed employees");
        Ok(responses)
    }

    pub async fn get_employee_by_id(&self, id: i64) -> ServiceResult<EmployeeResponse> {
        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::EmployeeNotFound(id))?;
        let department = self.resolve_department(employee.department_id).await?;
        Self::to_response(employee, department.as_ref())
    }

    pub async fn create_employee(&self, request: EmployeeRequest) -> ServiceResult<EmployeeResponse> {
        let department = self.require_department(request.department_id).await?;

        let saved = self.employees.save(Employee::from_request(request)).await?;
        tracing::info!(id = ?saved.id, name = %saved.name, "Employee created");

        Self::to_response(saved, department.as_ref())
    }

    /// Overwrites every mutable field of employee `id`
    pub async fn update_employee(
        &self,
        id: i64,
        request: EmployeeRequest,
    ) -> ServiceResult<EmployeeResponse> {
        let mut employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::EmployeeNotFound(id))?;
        let department = self.require_department(request.department_id).await?;

        employee.apply_request(request);
        // 查询与写入之间可能已被删除
        let saved = match self.employees.save(employee).await {
            Err(RepoError::NotFound(_)) => return Err(ServiceError::EmployeeNotFound(id)),
            result => result?,
        };
        tracing::info!(id, name = %saved.name, "Employee updated");

        Self::to_response(saved, department.as_ref())
    }

    pub async fn delete_employee(&self, id: i64) -> ServiceResult<()> {
        if !self.employees.exists_by_id(id).await? {
            return Err(ServiceError::EmployeeNotFound(id));
        }
        // 两次调用之间可能已被删除
        if !self.employees.delete_by_id(id).await? {
            return Err(ServiceError::EmployeeNotFound(id));
        }
        tracing::info!(id, "Employee deleted");
        Ok(())
    }

    pub async fn employee_count(&self) -> ServiceResult<i64> {
        Ok(self.employees.count().await?)
    }

    /// Department for an optional reference; a dangling reference resolves to `None`
    async fn resolve_department(&self, department_id: Option<i64>) -> ServiceResult<Option<Department>> {
        match department_id {
            Some(dept_id) => Ok(self.departments.find_by_id(dept_id).await?),
            None => Ok(None),
        }
    }

    /// Like [`Self::resolve_department`], but a dangling reference is an error
    async fn require_department(&self, department_id: Option<i64>) -> ServiceResult<Option<Department>> {
        let Some(dept_id) = department_id else {
            return Ok(None);
        };
        match self.departments.find_by_id(dept_id).await? {
            Some(department) => Ok(Some(department)),
            None => Err(ServiceError::DepartmentNotFound(dept_id)),
        }
    }

    fn to_response(
        employee: Employee,
        department: Option<&Department>,
    ) -> ServiceResult<EmployeeResponse> {
        let id = employee
            .id
            .ok_or_else(|| RepoError::Database("stored employee has no id".to_string()))?;
        Ok(EmployeeResponse::from_entity(id, employee, department))
    }
}
