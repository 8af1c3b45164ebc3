//! Presentation-facing workflows.
//!
//! The [`Controller`] is what a user interface talks to. It owns the
//! [`Scheduler`], the [`CredentialStore`] with its loaded [`UserSettings`],
//! and the [`ActivityLog`], and strings them together into complete user
//! requests:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Presentation   │    │   Controller    │    │   Scheduler     │
//! │ (CLI, tray, ..) │───▶│  gate + record  │───▶│ CredentialStore │
//! │                 │◀───│    Outcome      │    │  ActivityLog    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Cancelling a pending action is password gated here, not in the
//! scheduler: the external command is never run unless a password is
//! configured and the one supplied through [`PasswordPrompt`] verifies.
//!
//! # Example
//!
//! ```rust,no_run
//! use sundown_core::{ControllerBuilder, ScheduleRequest, ScheduledAction};
//! use jiff::{SignedDuration, Timestamp};
//!
//! # async fn example() -> sundown_core::Result<()> {
//! let mut controller = ControllerBuilder::new()
//!     .with_data_dir(Some("/tmp/sundown"))
//!     .build()
//!     .await?;
//!
//! let when = Timestamp::now() + SignedDuration::from_mins(45);
//! let outcome = controller
//!     .schedule(&ScheduleRequest::new(when, ScheduledAction::Shutdown))
//!     .await?;
//! println!("{outcome}");
//! println!("{}", controller.status_text(Timestamp::now()));
//! # Ok(())
//! # }
//! ```

mod builder;
mod outcome;

use async_trait::async_trait;
use jiff::Timestamp;
use log::{info, warn};

pub use builder::{ControllerBuilder, ACTIVITY_FILE, SCHEDULE_FILE, SETTINGS_FILE};
pub use outcome::{Notification, Outcome, Severity};

use crate::{
    activity_log::ActivityLog,
    credentials::CredentialStore,
    display::{LocalDateTime, LocalTime, ScheduleStatus, TrayStatus},
    error::{Result, SundownError},
    models::{ScheduleEntry, ScheduledAction, UserSettings},
    params::{PasswordInput, ScheduleRequest},
    scheduler::Scheduler,
};

/// Number of activity lines a status view shows by default.
pub const DEFAULT_RECENT_ACTIVITY: usize = 10;

/// Asks the user for a password.
///
/// The presentation owns the input widget; the controller only learns the
/// plaintext, or `None` when the user dismissed the prompt.
#[async_trait]
pub trait PasswordPrompt: Send + Sync {
    async fn request_password(&self, title: &str) -> Option<String>;
}

/// Entry point for user requests.
pub struct Controller {
    scheduler: Scheduler,
    credentials: CredentialStore,
    settings: UserSettings,
    activity: ActivityLog,
}

impl Controller {
    pub(crate) fn new(
        scheduler: Scheduler,
        credentials: CredentialStore,
        settings: UserSettings,
        activity: ActivityLog,
    ) -> Self {
        Self {
            scheduler,
            credentials,
            settings,
            activity,
        }
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// The pending entry, if any.
    pub fn current(&self) -> Option<&ScheduleEntry> {
        self.scheduler.current()
    }

    /// Schedules a future action and records it.
    ///
    /// # Errors
    ///
    /// Propagates validation and command errors from
    /// [`Scheduler::schedule`]; nothing is recorded in that case.
    pub async fn schedule(&mut self, request: &ScheduleRequest) -> Result<Outcome> {
        let entry = request.to_entry();
        let (action, time) = (entry.action, entry.time);
        self.scheduler.schedule(entry).await?;

        let mut outcome = Outcome::new(Notification::info(
            format!("{action} Scheduled"),
            format!("System will {} at {}.", action.verb(), LocalTime(&time)),
        ));

        self.settings.last_scheduled_time = Some(time);
        self.settings.last_scheduled_action = action;
        if let Err(e) = self.credentials.save(&self.settings).await {
            warn!("Could not save settings: {e}");
            outcome.warn(format!("Settings could not be saved: {e}"));
        }

        self.record(
            &format!("Scheduled {} for {}.", action.noun(), LocalDateTime(&time)),
            &mut outcome,
        )
        .await;
        Ok(outcome)
    }

    /// Cancels the pending action after the user proves they know the
    /// password. Returns `Ok(None)` when the prompt is dismissed.
    ///
    /// # Errors
    ///
    /// - `SundownError::NothingScheduled` when Idle
    /// - `SundownError::PasswordRequired` when no password is configured
    /// - `SundownError::AuthenticationFailed` when the password is wrong
    /// - `SundownError::CommandFailed` when the abort command fails
    ///
    /// The external command only runs once all three checks pass.
    pub async fn cancel(&mut self, prompt: &dyn PasswordPrompt) -> Result<Option<Outcome>> {
        let Some(action) = self.scheduler.current().map(|entry| entry.action) else {
            return Err(SundownError::NothingScheduled);
        };
        if !self.settings.has_password() {
            return Err(SundownError::PasswordRequired);
        }

        let Some(candidate) = prompt.request_password("Enter password").await else {
            info!("Cancellation dismissed at the password prompt");
            return Ok(None);
        };
        if !self.credentials.verify(&self.settings, &candidate).await {
            warn!("Cancellation refused: wrong password");
            return Err(SundownError::AuthenticationFailed);
        }

        self.scheduler.cancel().await?;

        let mut outcome = Outcome::new(Notification::info(
            format!("{action} Canceled"),
            format!("The pending {} has been canceled.", action.noun()),
        ));
        self.record(&format!("Scheduled {} canceled.", action.noun()), &mut outcome)
            .await;
        Ok(Some(outcome))
    }

    /// Performs `action` right away, superseding any pending schedule.
    ///
    /// # Errors
    ///
    /// Propagates `SundownError::CommandFailed`; the state is unchanged.
    pub async fn perform_immediate(&mut self, action: ScheduledAction) -> Result<Outcome> {
        self.scheduler.perform_immediate(action).await?;

        let description = immediate_description(action);
        let title = match action {
            ScheduledAction::Shutdown => "Shutdown Now",
            ScheduledAction::Restart => "Restarting",
            ScheduledAction::Logoff => "Logging Off",
            ScheduledAction::Hibernate => "Hibernating",
        };
        let notification = if action == ScheduledAction::Logoff {
            Notification::info(title, description)
        } else {
            Notification::warning(title, description)
        };

        let mut outcome = Outcome::new(notification);
        self.record(description, &mut outcome).await;
        Ok(outcome)
    }

    /// Replaces the password.
    ///
    /// # Errors
    ///
    /// Returns `SundownError::InvalidInput` for an empty or unconfirmed
    /// password and propagates save failures, since losing a new password
    /// silently would leave the old one in force.
    pub async fn set_password(&mut self, input: &PasswordInput) -> Result<Outcome> {
        let password = input.validate()?;
        self.credentials
            .set_password(&mut self.settings, password)
            .await?;

        let mut outcome = Outcome::new(Notification::info(
            "Password",
            "Password saved successfully.",
        ));
        self.record("Password updated.", &mut outcome).await;
        Ok(outcome)
    }

    /// Flips the dark-mode preference and returns the new value.
    ///
    /// # Errors
    ///
    /// Propagates save failures; the preference is not flipped in that case.
    pub async fn toggle_theme(&mut self) -> Result<bool> {
        let updated = UserSettings {
            is_dark_mode: !self.settings.is_dark_mode,
            ..self.settings.clone()
        };
        self.credentials.save(&updated).await?;
        self.settings = updated;
        Ok(self.settings.is_dark_mode)
    }

    /// Status line for the current schedule as of `now`.
    pub fn status_text(&self, now: Timestamp) -> String {
        ScheduleStatus {
            entry: self.current(),
            now,
        }
        .to_string()
    }

    /// Short tooltip text for a tray icon.
    pub fn tray_text(&self) -> String {
        TrayStatus(self.current()).to_string()
    }

    /// The newest `count` activity lines, oldest first.
    pub async fn recent_activity(&self, count: usize) -> Vec<String> {
        self.activity.recent(count).await
    }

    async fn record(&self, message: &str, outcome: &mut Outcome) {
        if let Err(e) = self.activity.append(message).await {
            warn!("Could not write activity log: {e}");
            outcome.warn(format!("Activity log could not be written: {e}"));
        }
    }
}

/// Activity line written after an immediate action succeeds.
pub fn immediate_description(action: ScheduledAction) -> &'static str {
    match action {
        ScheduledAction::Shutdown => "Shutdown initiated immediately.",
        ScheduledAction::Restart => "Restart command executed.",
        ScheduledAction::Logoff => "Log off command executed.",
        ScheduledAction::Hibernate => "Hibernate command executed.",
    }
}
