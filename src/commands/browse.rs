//! Subjects browser command (`assuntos browse`, also the default)

use iocraft::prelude::*;

use super::open_gateway;
use crate::error::{AssuntoError, Result};
use crate::tui::SubjectsBrowser;

/// Launch the subjects browser TUI
pub async fn cmd_browse(base_url: Option<&str>) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        return Err(AssuntoError::Other(
            "browse needs an interactive terminal; use 'assuntos ls' for scripted output"
                .to_string(),
        ));
    }

    let gateway = open_gateway(base_url)?;
    tracing::info!(base_url = %gateway.base_url(), "starting browser");

    element!(SubjectsBrowser(gateway: Some(gateway)))
        .fullscreen()
        .await
        .map_err(|e| AssuntoError::Other(format!("TUI error: {}", e)))
}
