//! tracing subscriber setup
//!
//! The browser owns the terminal, so it only logs when a file is given.
//! Plain commands fall back to warnings on stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt;
use tracing_subscriber::{EnvFilter, Registry, prelude::*};

use crate::error::Result;

/// Environment variable naming a log file
pub const LOG_FILE_ENV: &str = "ASSUNTOS_LOG_FILE";

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "assuntos=info";

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Disabled,
}

impl LogTarget {
    /// Pick a target from the `--log-file` flag, then `ASSUNTOS_LOG_FILE`.
    /// Without either, interactive sessions log nothing and other commands
    /// log to stderr.
    pub fn resolve(log_file: Option<&Path>, interactive: bool) -> Self {
        if let Some(path) = log_file {
            return LogTarget::File(path.to_path_buf());
        }

        if let Ok(path) = std::env::var(LOG_FILE_ENV)
            && !path.is_empty()
        {
            return LogTarget::File(PathBuf::from(path));
        }

        if interactive {
            LogTarget::Disabled
        } else {
            LogTarget::Stderr
        }
    }
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. A subscriber that is already set (tests)
/// is left in place.
pub fn init_logging(target: &LogTarget) -> Result<()> {
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr);

            let _ = Registry::default()
                .with(env_filter("assuntos=warn"))
                .with(layer)
                .try_init();
            Ok(())
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file));

            let _ = Registry::default()
                .with(env_filter(DEFAULT_FILTER))
                .with(layer)
                .try_init();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_flag_wins_over_env() {
        unsafe { std::env::set_var(LOG_FILE_ENV, "/tmp/from-env.log") };
        let target = LogTarget::resolve(Some(Path::new("/tmp/flag.log")), true);
        unsafe { std::env::remove_var(LOG_FILE_ENV) };

        assert_eq!(target, LogTarget::File(PathBuf::from("/tmp/flag.log")));
    }

    #[test]
    #[serial]
    fn test_env_file_used_when_no_flag() {
        unsafe { std::env::set_var(LOG_FILE_ENV, "/tmp/from-env.log") };
        let target = LogTarget::resolve(None, false);
        unsafe { std::env::remove_var(LOG_FILE_ENV) };

        assert_eq!(target, LogTarget::File(PathBuf::from("/tmp/from-env.log")));
    }

    #[test]
    #[serial]
    fn test_fallback_depends_on_interactivity() {
        unsafe { std::env::remove_var(LOG_FILE_ENV) };
        assert_eq!(LogTarget::resolve(None, true), LogTarget::Disabled);
        assert_eq!(LogTarget::resolve(None, false), LogTarget::Stderr);
    }
}
