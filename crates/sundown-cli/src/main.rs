//! Sundown CLI Application
//!
//! Command-line interface for scheduling and cancelling power actions.

mod args;
mod cli;
mod prompt;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use sundown_core::{ControllerBuilder, SundownError};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        data_dir,
        command_program,
        no_color,
        command,
    } = Args::parse();

    let controller = ControllerBuilder::new()
        .with_data_dir(data_dir)
        .with_command_program(command_program)
        .build()
        .await
        .context("Failed to initialize sundown")?;

    info!("Sundown started");

    let mut cli = Cli::new(controller, TerminalRenderer::new(!no_color));
    match cli.run(command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<SundownError>() {
            Some(error) => {
                cli.report(error)?;
                Ok(ExitCode::FAILURE)
            }
            None => Err(e),
        },
    }
}
