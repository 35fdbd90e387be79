//! Shared fixtures for the integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use employee_server::db::repository::{
    DepartmentLookup, EmployeeRepository, RepoError, RepoResult,
};
use employee_server::{Config, DbService, EmployeeService, ServerState, api};
use http_body_util::BodyExt;
use shared::models::{Department, Employee};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub async fn memory_db() -> DbService {
    DbService::in_memory().await.expect("in-memory database")
}

pub async fn insert_department(pool: &SqlitePool, id: i64, code: &str, head_name: Option<&str>) {
    sqlx::query("INSERT INTO department (id, code, head_name) VALUES (?, ?, ?)")
        .bind(id)
        .bind(code)
        .bind(head_name)
        .execute(pool)
        .await
        .expect("insert department");
}

pub fn employee(name: &str, salary: i64) -> Employee {
    Employee::new(name, salary)
}

/// In-memory employee store that counts writes
#[derive(Default)]
pub struct RecordingRepository {
    rows: Mutex<BTreeMap<i64, Employee>>,
    next_id: Mutex<i64>,
    pub saves: AtomicUsize,
    pub deletes: AtomicUsize,
}

impl RecordingRepository {
    /// Pre-populated store; seeding is not counted as a write
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let repo = Self::default();
        {
            let mut rows = repo.rows.lock().unwrap();
            let mut next_id = repo.next_id.lock().unwrap();
            for mut e in employees {
                *next_id += 1;
                let id = e.id.unwrap_or(*next_id);
                e.id = Some(id);
                rows.insert(id, e);
            }
        }
        repo
    }

    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeRepository for RecordingRepository {
    async fn save(&self, mut employee: Employee) -> RepoResult<Employee> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let id = match employee.id {
            Some(id) if !self.rows.lock().unwrap().contains_key(&id) => {
                return Err(RepoError::NotFound(id));
            }
            Some(id) => id,
            None => {
                let mut next_id = self.next_id.lock().unwrap();
                *next_id += 1;
                *next_id
            }
        };
        employee.id = Some(id);
        self.rows.lock().unwrap().insert(id, employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<Employee>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.name == name)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> RepoResult<bool> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }

    async fn exists_by_id(&self, id: i64) -> RepoResult<bool> {
        Ok(self.rows.lock().unwrap().contains_key(&id))
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

/// Fixed set of departments
#[derive(Default)]
pub struct StaticDepartments(pub Vec<Department>);

#[async_trait]
impl DepartmentLookup for StaticDepartments {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Department>> {
        Ok(self.0.iter().find(|d| d.id == id).cloned())
    }
}

pub fn lightweight() -> Department {
    Department {
        id: 1,
        code: "LW".to_string(),
        head_name: Some("Khabib Nurmagomedov".to_string()),
    }
}

pub fn test_config() -> Config {
    Config::with_overrides("./target/test-data", 0)
}

/// Router over the recording fake
pub fn fake_app(repo: Arc<RecordingRepository>, departments: Vec<Department>) -> Router {
    let service = EmployeeService::new(repo, Arc::new(StaticDepartments(departments)));
    api::build_router(ServerState::new(test_config(), service))
}

/// Router over a real in-memory SQLite store
pub fn sqlite_app(db: DbService) -> Router {
    api::build_router(ServerState::from_db(test_config(), db))
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Run one request through the router; returns status and raw body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, request).await;
    let value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, value)
}
