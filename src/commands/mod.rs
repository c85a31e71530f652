mod browse;
mod config;
mod courses;
mod ls;
mod save;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use courses::cmd_courses;
pub use ls::cmd_ls;
pub use save::cmd_save;

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::remote::HttpGateway;

/// Result of a command, renderable as JSON or as text
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print according to `output`. Text mode without text falls back to JSON.
    pub fn print(self, output: OutputOptions) -> Result<()> {
        match (output.json, self.text) {
            (false, Some(text)) => println!("{text}"),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build the HTTP gateway from the config file and the `--base-url` flag
pub(crate) fn open_gateway(base_url: Option<&str>) -> Result<HttpGateway> {
    let config = Config::load()?;
    let gateway = HttpGateway::from_config(&config, base_url)?;
    tracing::debug!(base_url = %gateway.base_url(), "using backend");
    Ok(gateway)
}

/// Course name for display, `-` when the course is unknown
pub fn format_course_name(name: Option<&str>) -> String {
    match name {
        Some(name) => name.to_string(),
        None => "-".dimmed().to_string(),
    }
}
