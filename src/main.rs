use clap::Parser;
use std::process::ExitCode;

use assuntos::cli::Cli;
use assuntos::logging::{LogTarget, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let target = LogTarget::resolve(cli.log_file.as_deref(), cli.is_interactive());
    if let Err(e) = init_logging(&target) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match cli.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
