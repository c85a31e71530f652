use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, open_gateway};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::SubjectGateway;
use crate::types::SubjectPayload;

/// Create a subject, or update it in place when `id` is given.
///
/// No local validation: an empty name or a missing course goes to the
/// backend as-is.
pub async fn cmd_save(
    base_url: Option<&str>,
    name: &str,
    course: Option<i64>,
    id: Option<i64>,
    output: OutputOptions,
) -> Result<()> {
    let gateway = open_gateway(base_url)?;

    let course_id = course.map(|c| c.to_string()).unwrap_or_default();
    let payload = SubjectPayload::from_form(id, name, &course_id);
    let action = if payload.is_update() { "updated" } else { "created" };

    let saved = gateway.save_subject(&payload).await?;
    tracing::info!(id = saved.id, action, "saved subject");

    let text = format!(
        "{} subject {} {} (materia {})",
        if payload.is_update() { "Updated" } else { "Created" },
        saved.id.to_string().cyan(),
        saved.name,
        saved.course.id
    );

    CommandOutput::new(json!({
        "action": action,
        "subject": saved,
    }))
    .with_text(text)
    .print(output)
}
