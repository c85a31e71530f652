//! Async operations behind the subjects browser
//!
//! Each operation talks to the gateway and returns the action that feeds the
//! result back into the reducer.

use crate::catalog::load_catalog;
use crate::remote::SubjectGateway;
use crate::types::SubjectPayload;

use super::model::{SaveFailure, SubjectsAction};

/// Fetch both lists concurrently
pub async fn load<G: SubjectGateway>(gateway: &G) -> SubjectsAction {
    let outcome = load_catalog(gateway).await;
    tracing::info!(
        courses = outcome.courses.as_ref().map(Vec::len),
        subjects = outcome.subjects.as_ref().map(Vec::len),
        "catalog loaded"
    );
    SubjectsAction::Loaded(outcome)
}

/// Create or update a subject
pub async fn save<G: SubjectGateway>(gateway: &G, payload: SubjectPayload) -> SubjectsAction {
    let action = if payload.is_update() { "update" } else { "create" };

    match gateway.save_subject(&payload).await {
        Ok(saved) => {
            tracing::info!(id = saved.id, action, "subject saved");
            SubjectsAction::SaveSucceeded(saved)
        }
        Err(e) => {
            tracing::error!(action, id = ?payload.id, "failed to save subject: {e}");
            SubjectsAction::SaveFailed(SaveFailure::from_error(&e))
        }
    }
}
