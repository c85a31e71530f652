use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{open_gateway, print_json};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::SubjectGateway;

#[derive(Tabled)]
struct CourseRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Nome")]
    name: String,
}

/// List every course
pub async fn cmd_courses(base_url: Option<&str>, output: OutputOptions) -> Result<()> {
    let gateway = open_gateway(base_url)?;
    let courses = gateway.list_courses().await?;

    if output.json {
        return print_json(&courses);
    }

    if courses.is_empty() {
        println!("{}", "No courses".dimmed());
        return Ok(());
    }

    let rows: Vec<CourseRow> = courses
        .into_iter()
        .map(|c| CourseRow {
            id: c.id,
            name: c.name,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{table}");

    Ok(())
}
