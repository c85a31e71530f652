//! Client-side catalog: cached lists, the subject form and search filtering

pub mod filter;
pub mod form;
pub mod store;

pub use filter::{FilteredSubject, filter_subjects, find_course};
pub use form::{Draft, FormField, FormState};
pub use store::{CatalogSlice, LoadFailure, LoadOutcome, Reconciled, SubjectStore};

use crate::remote::SubjectGateway;

/// Fetch courses and subjects concurrently.
///
/// Both requests always run to completion; failures are collected in the
/// returned outcome rather than short-circuiting.
pub async fn load_catalog<G: SubjectGateway>(gateway: &G) -> LoadOutcome {
    let (courses, subjects) = tokio::join!(gateway.list_courses(), gateway.list_subjects());

    let outcome = LoadOutcome::from_results(courses, subjects);
    for failure in &outcome.failures {
        tracing::warn!(slice = %failure.slice, "failed to load: {}", failure.message);
    }
    outcome
}
