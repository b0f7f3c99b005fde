use anyhow::{Context, Result};
use clap::Parser;
use prime_finder::{logger, AppError, CliConfig, Session};
use std::io;

fn main() -> Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.log.as_deref());
    tracing::debug!(?config, "starting prime-finder");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.verbose);

    match session.run() {
        // Ctrl-D at a prompt ends the program like the exit option
        Err(AppError::InputClosed { expected }) => {
            tracing::info!(expected, "input closed, exiting");
            Ok(())
        }
        other => other.context("interactive session failed"),
    }
}
