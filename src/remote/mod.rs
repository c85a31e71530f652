//! Remote data gateway for the subjects backend.
//!
//! The [`SubjectGateway`] trait is the seam between the catalog/TUI and the
//! network. [`HttpGateway`] is the reqwest-backed implementation; tests swap in
//! in-memory gateways.

pub mod http;

use std::future::Future;

use crate::error::Result;
use crate::types::{Course, Subject, SubjectPayload};

pub use http::HttpGateway;

/// The four operations the backend exposes to this client
pub trait SubjectGateway: Send + Sync {
    /// Fetch every course
    fn list_courses(&self) -> impl Future<Output = Result<Vec<Course>>> + Send;

    /// Fetch every subject
    fn list_subjects(&self) -> impl Future<Output = Result<Vec<Subject>>> + Send;

    /// Create (no id) or replace (with id) a subject, returning the stored record
    fn save_subject(
        &self,
        payload: &SubjectPayload,
    ) -> impl Future<Output = Result<Subject>> + Send;
}
