#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use sundown_core::{
    CommandExecutor, Controller, ControllerBuilder, PasswordPrompt, Result, SundownError,
};
use tempfile::TempDir;

/// Executor that records every argument string instead of running anything.
/// Queued results are replayed in order; calls with nothing queued succeed.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<String>>,
    results: Mutex<VecDeque<Result<()>>>,
}

impl RecordingExecutor {
    pub fn fail_next(&self, message: &str) {
        self.results
            .lock()
            .unwrap()
            .push_back(Err(SundownError::command_failed(message, Some(1))));
    }

    pub fn succeed_next(&self) {
        self.results.lock().unwrap().push_back(Ok(()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandExecutor for RecordingExecutor {
    async fn execute(&self, arguments: &str) -> Result<()> {
        self.calls.lock().unwrap().push(arguments.to_string());
        self.results.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

/// Prompt that always answers with the same value.
pub struct FixedPrompt(pub Option<String>);

impl FixedPrompt {
    pub fn answer(password: &str) -> Self {
        Self(Some(password.to_string()))
    }

    pub fn dismissed() -> Self {
        Self(None)
    }
}

#[async_trait]
impl PasswordPrompt for FixedPrompt {
    async fn request_password(&self, _title: &str) -> Option<String> {
        self.0.clone()
    }
}

/// Helper function to create a controller over a temporary data directory
pub async fn create_test_controller() -> (TempDir, Arc<RecordingExecutor>, Controller) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let executor = Arc::new(RecordingExecutor::default());
    let controller = open_controller(&temp_dir, executor.clone()).await;
    (temp_dir, executor, controller)
}

/// Opens another controller over an existing data directory.
pub async fn open_controller(temp_dir: &TempDir, executor: Arc<RecordingExecutor>) -> Controller {
    ControllerBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .with_executor(executor)
        .build()
        .await
        .expect("Failed to create controller")
}
