use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_course_name, open_gateway, print_json};
use crate::catalog::{CatalogSlice, SubjectStore, filter_subjects, load_catalog};
use crate::cli::OutputOptions;
use crate::error::{AssuntoError, Result};

#[derive(Tabled)]
struct SubjectRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "Materia")]
    course: String,
}

/// List subjects, optionally filtered by a search term.
///
/// Courses failing to load only degrades the course column; subjects failing
/// to load is an error.
pub async fn cmd_ls(base_url: Option<&str>, search: Option<&str>, output: OutputOptions) -> Result<()> {
    let gateway = open_gateway(base_url)?;
    let outcome = load_catalog(&gateway).await;

    if let Some(failure) = outcome
        .failures
        .iter()
        .find(|f| f.slice == CatalogSlice::Subjects)
    {
        return Err(AssuntoError::Other(format!(
            "failed to load subjects: {}",
            failure.message
        )));
    }

    let mut store = SubjectStore::default();
    store.apply_load(&outcome);

    let filtered = filter_subjects(&store.subjects, &store.courses, search.unwrap_or(""));

    if !outcome.is_complete() {
        eprintln!("{}", "Warning: courses could not be loaded".yellow());
    }

    if output.json {
        return print_json(&filtered);
    }

    if filtered.is_empty() {
        match search {
            Some(term) if !term.is_empty() => {
                println!("{}", format!("No subjects match '{term}'").dimmed())
            }
            _ => println!("{}", "No subjects".dimmed()),
        }
        return Ok(());
    }

    let rows: Vec<SubjectRow> = filtered
        .iter()
        .map(|f| SubjectRow {
            id: f.subject.id,
            name: f.subject.name.clone(),
            course: format_course_name(f.course_name.as_deref()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{table}");

    Ok(())
}
