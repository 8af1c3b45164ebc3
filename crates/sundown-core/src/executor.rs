//! Execution of the external power-control command.
//!
//! The [`CommandExecutor`] trait is the seam between the scheduling state
//! machine and the operating system. [`ProcessExecutor`] is the real
//! implementation: it starts one process per call, captures both output
//! streams and turns a nonzero exit status into a
//! [`SundownError::CommandFailed`] whose message can be shown to the user
//! verbatim. Tests substitute a recording implementation.

use std::{path::PathBuf, process::Stdio};

use async_trait::async_trait;
use log::debug;
use tokio::process::Command;

use crate::error::{Result, SundownError};

/// Program invoked when none is configured.
pub const DEFAULT_PROGRAM: &str = "shutdown";

/// Runs the power-control command with a whitespace separated argument
/// string.
///
/// Implementations must start at most one process per call and must not
/// retry.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute the command and wait for it to exit.
    async fn execute(&self, arguments: &str) -> Result<()>;
}

/// Executes a program on the host and inspects its exit status.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    program: PathBuf,
}

impl ProcessExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, arguments: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(arguments.split_whitespace())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        #[cfg(windows)]
        {
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        cmd
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, arguments: &str) -> Result<()> {
        debug!("Running {} {}", self.program.display(), arguments);

        let output = self
            .command(arguments)
            .output()
            .await
            .map_err(|e| SundownError::command_failed(e.to_string(), None))?;

        if output.status.success() {
            return Ok(());
        }

        let code = output.status.code();
        let message = failure_message(&output.stderr, &output.stdout, code);
        debug!("{} failed: {}", self.program.display(), message);
        Err(SundownError::command_failed(message, code))
    }
}

/// Picks the most useful text for a failed run: stderr, then stdout, then a
/// synthesized line naming the exit code.
fn failure_message(stderr: &[u8], stdout: &[u8], code: Option<i32>) -> String {
    [stderr, stdout]
        .into_iter()
        .map(|stream| String::from_utf8_lossy(stream).trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| match code {
            Some(code) => format!("Command exited with code {code}."),
            None => "Command terminated by a signal.".to_string(),
        })
}
