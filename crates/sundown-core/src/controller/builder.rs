//! Builder for creating and configuring Controller instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::Controller;
use crate::{
    activity_log::ActivityLog,
    credentials::CredentialStore,
    error::{FsResultExt, Result, SundownError},
    executor::{CommandExecutor, ProcessExecutor},
    scheduler::Scheduler,
};

/// File holding the password material and preferences.
pub const SETTINGS_FILE: &str = "settings.json";
/// File holding the pending schedule, absent when Idle.
pub const SCHEDULE_FILE: &str = "schedule.json";
/// Append-only activity history.
pub const ACTIVITY_FILE: &str = "activity.log";

/// Builder for creating and configuring Controller instances.
#[derive(Clone, Default)]
pub struct ControllerBuilder {
    data_dir: Option<PathBuf>,
    program: Option<String>,
    executor: Option<Arc<dyn CommandExecutor>>,
}

impl ControllerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data directory.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/sundown/` or `~/.local/share/sundown/`
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the program run for power actions, `shutdown` by default.
    pub fn with_command_program<S: Into<String>>(mut self, program: Option<S>) -> Self {
        if let Some(program) = program {
            self.program = Some(program.into());
        }
        self
    }

    /// Replaces the process executor entirely. Takes precedence over
    /// [`with_command_program`](Self::with_command_program).
    pub fn with_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Builds the configured controller, loading persisted settings and any
    /// pending schedule.
    ///
    /// # Errors
    ///
    /// Returns `SundownError::XdgDirectory` if no default location exists
    /// Returns `SundownError::FileSystem` if the data directory cannot be created
    pub async fn build(self) -> Result<Controller> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };
        tokio::fs::create_dir_all(&data_dir)
            .await
            .fs_context(&data_dir)?;
        debug!("Using data directory {}", data_dir.display());

        let executor = match (self.executor, self.program) {
            (Some(executor), _) => executor,
            (None, Some(program)) => Arc::new(ProcessExecutor::new(program)),
            (None, None) => Arc::new(ProcessExecutor::default()),
        };

        let credentials = CredentialStore::new(data_dir.join(SETTINGS_FILE));
        let settings = credentials.load().await;
        let scheduler = Scheduler::open(executor, data_dir.join(SCHEDULE_FILE)).await;
        let activity = ActivityLog::new(data_dir.join(ACTIVITY_FILE));

        Ok(Controller::new(scheduler, credentials, settings, activity))
    }

    /// Returns the default data directory following XDG Base Directory
    /// specification.
    fn default_data_dir() -> Result<PathBuf> {
        let settings = xdg::BaseDirectories::with_prefix("sundown")
            .place_data_file(SETTINGS_FILE)
            .map_err(|e| SundownError::XdgDirectory(e.to_string()))?;
        settings
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| SundownError::XdgDirectory("data directory has no parent".to_string()))
    }
}
