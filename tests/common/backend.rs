//! In-process REST backend for exercising the HTTP gateway and the CLI.
//!
//! Serves `/materias` and `/assuntos` from memory and records every write
//! request body so tests can assert on the exact wire format.

use std::net::TcpListener as StdTcpListener;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;

use assuntos::types::{Course, Subject, SubjectPayload};

/// A write request as the backend received it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWrite {
    pub method: &'static str,
    pub path: String,
    pub body: Value,
}

#[derive(Default)]
struct BackendData {
    courses: Vec<Course>,
    subjects: Vec<Subject>,
    writes: Vec<RecordedWrite>,
    /// When set, every write answers with this status and body
    reject_writes: Option<(u16, String)>,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    data: Arc<Mutex<BackendData>>,
}

impl MockBackend {
    pub fn new(courses: Vec<Course>, subjects: Vec<Subject>) -> Self {
        let backend = MockBackend::default();
        {
            let mut data = backend.data.lock().unwrap();
            data.courses = courses;
            data.subjects = subjects;
        }
        backend
    }

    pub fn reject_writes(&self, status: u16, body: &str) {
        self.data.lock().unwrap().reject_writes = Some((status, body.to_string()));
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.data.lock().unwrap().writes.clone()
    }

    pub fn subjects(&self) -> Vec<Subject> {
        self.data.lock().unwrap().subjects.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/materias", get(list_courses))
            .route("/assuntos", get(list_subjects).post(create_subject))
            .route("/assuntos/{id}", put(update_subject))
            .with_state(self.clone())
    }

    /// Start serving on an ephemeral port and return the base URL
    pub async fn start(&self) -> String {
        serve(self.router()).await
    }

    fn record(&self, method: &'static str, path: String, body: &Value) -> Option<(StatusCode, String)> {
        let mut data = self.data.lock().unwrap();
        data.writes.push(RecordedWrite {
            method,
            path,
            body: body.clone(),
        });
        data.reject_writes.clone().map(|(status, body)| {
            (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body,
            )
        })
    }
}

type WriteResult = Result<Json<Subject>, (StatusCode, String)>;

async fn list_courses(State(backend): State<MockBackend>) -> Json<Vec<Course>> {
    Json(backend.data.lock().unwrap().courses.clone())
}

async fn list_subjects(State(backend): State<MockBackend>) -> Json<Vec<Subject>> {
    Json(backend.data.lock().unwrap().subjects.clone())
}

async fn create_subject(State(backend): State<MockBackend>, Json(body): Json<Value>) -> WriteResult {
    if let Some(rejection) = backend.record("POST", "/assuntos".to_string(), &body) {
        return Err(rejection);
    }

    let payload = parse_payload(body)?;
    let mut data = backend.data.lock().unwrap();
    let id = data.subjects.iter().map(|s| s.id).max().unwrap_or(0) + 1;
    let subject = Subject::new(id, payload.name.clone(), course_id(&payload)?);
    data.subjects.push(subject.clone());
    Ok(Json(subject))
}

async fn update_subject(
    State(backend): State<MockBackend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> WriteResult {
    if let Some(rejection) = backend.record("PUT", format!("/assuntos/{id}"), &body) {
        return Err(rejection);
    }

    let payload = parse_payload(body)?;
    let mut data = backend.data.lock().unwrap();
    let subject = Subject::new(id, payload.name.clone(), course_id(&payload)?);
    match data.subjects.iter_mut().find(|s| s.id == id) {
        Some(existing) => *existing = subject.clone(),
        None => return Err((StatusCode::NOT_FOUND, format!("assunto {id} not found"))),
    }
    Ok(Json(subject))
}

fn parse_payload(body: Value) -> Result<SubjectPayload, (StatusCode, String)> {
    serde_json::from_value(body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

fn course_id(payload: &SubjectPayload) -> Result<i64, (StatusCode, String)> {
    payload
        .course
        .id
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "materia is required".to_string()))
}

/// Serve any router on an ephemeral local port
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("test server failed");
    });
    format!("http://{addr}")
}

/// A base URL on which nothing is listening
pub fn closed_port_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("Failed to bind probe listener");
    let port = listener
        .local_addr()
        .expect("listener has an address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
