//! The scheduling state machine.
//!
//! A [`Scheduler`] is either **Idle** (no entry) or **Pending** (exactly one
//! [`ScheduleEntry`]). Every transition is driven by a call to the external
//! command through a [`CommandExecutor`] and only happens when that command
//! succeeds:
//!
//! ```text
//!            schedule ok                    schedule ok
//!   ┌──────┐ ─────────────▶ ┌─────────┐ ◀────────────── (replaces entry)
//!   │ Idle │                │ Pending │
//!   └──────┘ ◀───────────── └─────────┘
//!            cancel ok / immediate ok
//! ```
//!
//! A failed call leaves the state exactly as it was. State-changing methods
//! take `&mut self`, so a single owner issues one request at a time.
//!
//! The entry is mirrored to a JSON file after each successful transition and
//! reloaded on [`Scheduler::open`], so status survives an application
//! restart. The OS-level command keeps running independently of this
//! process either way.

mod commands;
mod store;


use std::{path::PathBuf, sync::Arc};

use jiff::Timestamp;
use log::{error, info, warn};

pub use commands::{
    delay_seconds, immediate_arguments, scheduled_arguments, ABORT_ARGUMENTS, MAX_DELAY_SECONDS,
};
pub use store::ScheduleStore;

use crate::{
    error::{Result, SundownError},
    executor::CommandExecutor,
    models::{ScheduleEntry, ScheduledAction},
};

/// The two states of a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Pending,
}

/// Owner of the single current schedule entry.
pub struct Scheduler {
    executor: Arc<dyn CommandExecutor>,
    store: ScheduleStore,
    current: Option<ScheduleEntry>,
}

impl Scheduler {
    /// Creates a scheduler, restoring any entry persisted at `path`.
    pub async fn open(executor: Arc<dyn CommandExecutor>, path: impl Into<PathBuf>) -> Self {
        let store = ScheduleStore::new(path);
        let current = store.load().await;
        if let Some(entry) = &current {
            info!("Restored pending {} for {}", entry.action, entry.time);
        }
        Self {
            executor,
            store,
            current,
        }
    }

    /// The pending entry, if any.
    pub fn current(&self) -> Option<&ScheduleEntry> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SchedulerState {
        if self.current.is_some() {
            SchedulerState::Pending
        } else {
            SchedulerState::Idle
        }
    }

    /// Asks the OS to perform `entry.action` at `entry.time` and, on success,
    /// makes `entry` the pending entry, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `SundownError::InvalidInput` when `entry.time` is not in the
    /// future (the command is not run), or `SundownError::CommandFailed` when
    /// the command fails. The state is unchanged in both cases.
    pub async fn schedule(&mut self, entry: ScheduleEntry) -> Result<()> {
        let now = Timestamp::now();
        if entry.time <= now {
            return Err(SundownError::invalid_input("time").with_reason("must be in the future"));
        }

        let delay = delay_seconds(entry.time, now);
        let arguments = scheduled_arguments(entry.action, delay);
        self.executor.execute(&arguments).await?;

        info!("Scheduled {} in {}s ({})", entry.action, delay, entry.id);
        self.transition(Some(entry)).await;
        Ok(())
    }

    /// Asks the OS to abort whatever is pending and, on success, becomes
    /// Idle. Permitted while Idle; performs no authentication.
    ///
    /// # Errors
    ///
    /// Returns `SundownError::CommandFailed` when the abort command fails;
    /// the state is unchanged.
    pub async fn cancel(&mut self) -> Result<()> {
        self.executor.execute(ABORT_ARGUMENTS).await?;

        info!("Pending action aborted");
        self.transition(None).await;
        Ok(())
    }

    /// Performs `action` now and, on success, becomes Idle.
    ///
    /// When a shutdown or restart is pending its OS timer is aborted first,
    /// since the OS refuses a new shutdown while one is scheduled and would
    /// otherwise keep the old timer armed. If the immediate command then
    /// fails the pending entry is re-armed with its remaining delay.
    ///
    /// # Errors
    ///
    /// Returns `SundownError::CommandFailed` when the abort or the action
    /// fails; the state is unchanged.
    pub async fn perform_immediate(&mut self, action: ScheduledAction) -> Result<()> {
        let armed = self
            .current
            .as_ref()
            .filter(|entry| entry.action.has_delay_switch())
            .cloned();

        if armed.is_some() {
            self.executor.execute(ABORT_ARGUMENTS).await?;
        }

        if let Err(e) = self.executor.execute(&immediate_arguments(action)).await {
            if let Some(entry) = armed {
                self.rearm(&entry).await;
            }
            return Err(e);
        }

        info!("{} performed immediately", action);
        self.transition(None).await;
        Ok(())
    }

    async fn rearm(&self, entry: &ScheduleEntry) {
        let now = Timestamp::now();
        if entry.time <= now {
            warn!("Pending {} passed its time while aborted; not re-armed", entry.action);
            return;
        }
        let arguments = scheduled_arguments(entry.action, delay_seconds(entry.time, now));
        if let Err(e) = self.executor.execute(&arguments).await {
            error!(
                "Could not re-arm pending {} after a failed immediate action: {}",
                entry.action, e
            );
        }
    }

    /// Replaces the in-memory entry and mirrors it to disk. A failed write is
    /// logged and otherwise ignored; the in-memory state stays authoritative.
    async fn transition(&mut self, next: Option<ScheduleEntry>) {
        if let Err(e) = self.store.save(next.as_ref()).await {
            warn!(
                "Could not persist schedule to {}: {}",
                self.store.path().display(),
                e
            );
        }
        self.current = next;
    }
}
