//! HTTP gateway tests against an in-process backend
//!
//! Covers the wire format of both write paths, the error classification the
//! browser relies on (rejected vs transport), and the concurrent initial load.

mod common;

use axum::Router;
use axum::routing::get;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;

use assuntos::catalog::{CatalogSlice, load_catalog};
use assuntos::{AssuntoError, HttpGateway, SubjectGateway, SubjectPayload};
use common::backend::{MockBackend, RecordedWrite, closed_port_url, serve};
use common::mock_data::{mock_courses, mock_subjects};

async fn start_backend() -> (MockBackend, HttpGateway) {
    let backend = MockBackend::new(mock_courses(), mock_subjects());
    let url = backend.start().await;
    let gateway = HttpGateway::new(&url, None).unwrap();
    (backend, gateway)
}

#[tokio::test]
async fn test_list_courses_and_subjects() {
    let (_backend, gateway) = start_backend().await;

    let courses = gateway.list_courses().await.unwrap();
    assert_eq!(courses, mock_courses());

    let subjects = gateway.list_subjects().await.unwrap();
    assert_eq!(subjects, mock_subjects());
}

#[tokio::test]
async fn test_create_posts_null_id() {
    let (backend, gateway) = start_backend().await;

    let payload = SubjectPayload::from_form(None, "Geometria Analítica", "10");
    let saved = gateway.save_subject(&payload).await.unwrap();

    assert_eq!(saved.id, 6);
    assert_eq!(saved.name, "Geometria Analítica");
    assert_eq!(saved.course.id, 10);

    assert_eq!(
        backend.writes(),
        vec![RecordedWrite {
            method: "POST",
            path: "/assuntos".to_string(),
            body: json!({"id": null, "nome": "Geometria Analítica", "materia": {"id": 10}}),
        }]
    );
}

#[tokio::test]
async fn test_update_puts_to_subject_path() {
    let (backend, gateway) = start_backend().await;

    let payload = SubjectPayload::from_form(Some(2), "Geometria Plana", "30");
    let saved = gateway.save_subject(&payload).await.unwrap();

    assert_eq!(saved.id, 2);
    assert_eq!(saved.course.id, 30);

    let writes = backend.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].method, "PUT");
    assert_eq!(writes[0].path, "/assuntos/2");
    assert_eq!(
        writes[0].body,
        json!({"id": 2, "nome": "Geometria Plana", "materia": {"id": 30}})
    );

    let stored = backend.subjects();
    assert_eq!(stored.len(), mock_subjects().len());
    assert_eq!(stored[1].name, "Geometria Plana");
}

#[tokio::test]
async fn test_unselected_course_is_sent_as_null() {
    let (backend, gateway) = start_backend().await;

    let payload = SubjectPayload::from_form(None, "Sem matéria", "");
    let err = gateway.save_subject(&payload).await.unwrap_err();

    assert_eq!(
        backend.writes()[0].body,
        json!({"id": null, "nome": "Sem matéria", "materia": {"id": null}})
    );
    match err {
        AssuntoError::RemoteRejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "materia is required");
        }
        other => panic!("expected RemoteRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejection_keeps_status_and_body() {
    let (backend, gateway) = start_backend().await;
    backend.reject_writes(422, "nome must not be blank");

    let payload = SubjectPayload::from_form(None, "", "10");
    let err = gateway.save_subject(&payload).await.unwrap_err();

    assert!(!err.is_transport());
    assert!(matches!(
        err,
        AssuntoError::RemoteRejected { status: 422, ref body } if body == "nome must not be blank"
    ));
}

#[tokio::test]
async fn test_server_error_is_rejection() {
    let (backend, gateway) = start_backend().await;
    backend.reject_writes(500, "");

    let payload = SubjectPayload::from_form(Some(1), "Álgebra", "10");
    let err = gateway.save_subject(&payload).await.unwrap_err();

    assert!(matches!(err, AssuntoError::RemoteRejected { status: 500, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let router = Router::new().route("/materias", get(|| async { "definitely not json" }));
    let url = serve(router).await;
    let gateway = HttpGateway::new(&url, None).unwrap();

    let err = gateway.list_courses().await.unwrap_err();
    assert!(matches!(err, AssuntoError::Parse(_)), "got {err:?}");
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let gateway = HttpGateway::new(&closed_port_url(), None).unwrap();

    let err = gateway.list_subjects().await.unwrap_err();
    assert!(matches!(err, AssuntoError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let backend = MockBackend::new(mock_courses(), mock_subjects());
    let router = Router::new().nest("/api", backend.router());
    let url = serve(router).await;

    let gateway = HttpGateway::new(&format!("{url}/api"), None).unwrap();
    assert_eq!(gateway.list_courses().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_load_catalog_complete() {
    let (_backend, gateway) = start_backend().await;

    let outcome = load_catalog(&gateway).await;
    assert!(outcome.is_complete());
    assert_eq!(outcome.courses, Some(mock_courses()));
    assert_eq!(outcome.subjects, Some(mock_subjects()));
}

#[tokio::test]
async fn test_load_catalog_requests_run_concurrently() {
    // Each handler only answers once both requests have arrived
    let barrier = Arc::new(Barrier::new(2));
    let courses_barrier = barrier.clone();
    let subjects_barrier = barrier.clone();

    let router = Router::new()
        .route(
            "/materias",
            get(move || {
                let barrier = courses_barrier.clone();
                async move {
                    barrier.wait().await;
                    axum::Json(mock_courses())
                }
            }),
        )
        .route(
            "/assuntos",
            get(move || {
                let barrier = subjects_barrier.clone();
                async move {
                    barrier.wait().await;
                    axum::Json(mock_subjects())
                }
            }),
        );
    let url = serve(router).await;
    let gateway = HttpGateway::new(&url, None).unwrap();

    let outcome = tokio::time::timeout(Duration::from_secs(5), load_catalog(&gateway))
        .await
        .expect("courses and subjects should be requested at the same time");
    assert!(outcome.is_complete());
    assert_eq!(outcome.courses, Some(mock_courses()));
    assert_eq!(outcome.subjects, Some(mock_subjects()));
}

#[tokio::test]
async fn test_load_catalog_partial_failure() {
    let router = Router::new()
        .route("/materias", get(|| async { "oops" }))
        .route("/assuntos", get(|| async { axum::Json(mock_subjects()) }));
    let url = serve(router).await;
    let gateway = HttpGateway::new(&url, None).unwrap();

    let outcome = load_catalog(&gateway).await;
    assert_eq!(outcome.courses, None);
    assert_eq!(outcome.subjects, Some(mock_subjects()));
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].slice, CatalogSlice::Courses);
    assert_eq!(
        outcome.failure_summary().as_deref(),
        Some("Failed to load courses")
    );
}

#[tokio::test]
async fn test_load_catalog_unreachable() {
    let gateway = HttpGateway::new(&closed_port_url(), None).unwrap();

    let outcome = load_catalog(&gateway).await;
    assert_eq!(outcome.courses, None);
    assert_eq!(outcome.subjects, None);
    assert_eq!(
        outcome.failure_summary().as_deref(),
        Some("Failed to load courses, subjects")
    );
}
