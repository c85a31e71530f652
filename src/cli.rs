use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

use crate::config::VALID_KEYS;

#[derive(Parser)]
#[command(name = "assuntos")]
#[command(about = "Manage subjects and their courses on a remote backend")]
#[command(version)]
pub struct Cli {
    /// Backend base URL for this invocation (overrides config and ASSUNTOS_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Append logs to this file (also ASSUNTOS_LOG_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse, search, create and edit subjects interactively (default)
    #[command(visible_alias = "b")]
    Browse,

    /// List subjects with their course names
    Ls {
        /// Keep only subjects whose name or course name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List courses
    Courses {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a subject, or update one when --id is given
    Save {
        /// Subject name
        #[arg(short, long)]
        name: String,

        /// Course id
        #[arg(short, long)]
        course: Option<i64>,

        /// Id of an existing subject to update
        #[arg(long)]
        id: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (base_url, request_timeout)
        #[arg(value_parser = parse_config_key)]
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (base_url, request_timeout)
        #[arg(value_parser = parse_config_key)]
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Output mode shared by the commands
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

impl OutputOptions {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl Cli {
    /// Whether this invocation takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Browse))
    }

    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_courses, cmd_ls,
            cmd_save,
        };

        let base_url = self.base_url.as_deref();

        match self.command.unwrap_or(Commands::Browse) {
            Commands::Browse => cmd_browse(base_url).await,

            Commands::Ls { search, json } => {
                cmd_ls(base_url, search.as_deref(), OutputOptions::new(json)).await
            }

            Commands::Courses { json } => cmd_courses(base_url, OutputOptions::new(json)).await,

            Commands::Save {
                name,
                course,
                id,
                json,
            } => cmd_save(base_url, &name, course, id, OutputOptions::new(json)).await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(OutputOptions::new(json)),
                ConfigAction::Set { key, value, json } => {
                    cmd_config_set(&key, &value, OutputOptions::new(json))
                }
                ConfigAction::Get { key, json } => {
                    cmd_config_get(&key, OutputOptions::new(json))
                }
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_config_key(s: &str) -> Result<String, String> {
    if VALID_KEYS.contains(&s) {
        return Ok(s.to_string());
    }

    // Accept the dotted/dashed spellings people tend to type
    let normalized = s.replace(['-', '.'], "_");
    if VALID_KEYS.contains(&normalized.as_str()) {
        return Ok(normalized);
    }

    Err(format!(
        "Invalid config key. Must be one of: {}",
        VALID_KEYS.join(", ")
    ))
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "assuntos", &mut io::stdout());
}
