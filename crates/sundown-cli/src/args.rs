use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CancelArgs, LogArgs, NowArgs, PasswordArgs, ScheduleArgs, StatusArgs};

/// Schedule a shutdown, restart, log-off or hibernate
///
/// Sundown keeps at most one pending power action. Scheduling again replaces
/// it; cancelling requires the password set with `sundown password`. Every
/// change is recorded in an activity log.
#[derive(Parser)]
#[command(version, about, name = "sundown")]
pub struct Args {
    /// Directory for settings, schedule and activity log. Defaults to
    /// $XDG_DATA_HOME/sundown
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Program invoked for power actions
    #[arg(long = "command", global = true, value_name = "PROGRAM")]
    pub command_program: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Sundown CLI
///
/// Without a command the current status and recent activity are shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Schedule a power action, replacing any pending one
    #[command(alias = "s")]
    Schedule(ScheduleArgs),
    /// Cancel the pending action (requires the password)
    #[command(alias = "c")]
    Cancel(CancelArgs),
    /// Perform a power action right away
    Now(NowArgs),
    /// Set the cancellation password
    Password(PasswordArgs),
    /// Toggle the dark mode preference
    Theme,
    /// Show recent activity
    Log(LogArgs),
    /// Show what is scheduled and how long is left
    #[command(alias = "st")]
    Status(StatusArgs),
}
