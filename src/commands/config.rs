//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{BASE_URL_ENV, Config};
use crate::error::{AssuntoError, Result};

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;
    let effective = config.effective_base_url(None);

    let json_output = json!({
        "base_url": config.base_url,
        "effective_base_url": effective,
        "request_timeout": config.request_timeout,
        "config_file": path.to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}: {}\n", "base_url".cyan(), config.base_url));

    if effective != config.base_url {
        text_output.push_str(&format!(
            "  {}\n",
            format!("overridden by {BASE_URL_ENV}: {effective}").yellow()
        ));
    }

    match config.request_timeout {
        Some(secs) => {
            text_output.push_str(&format!("{}: {secs}s\n", "request_timeout".cyan()))
        }
        None => text_output.push_str(&format!(
            "{}: {}\n",
            "request_timeout".cyan(),
            "none".dimmed()
        )),
    }

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key)?;
    let text = match &stored {
        Some(v) => format!("Set {} to {}", key.cyan(), v),
        None => format!("Cleared {}", key.cyan()),
    };

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(text)
    .print(output)
}

/// Get a configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;

    let value = config
        .get(key)?
        .ok_or_else(|| AssuntoError::Config(format!("{key} not set")))?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value.clone())
    .print(output)
}
