//! Core library for the Sundown power-action scheduler.
//!
//! This crate schedules a single shutdown, restart, log-off or hibernate
//! through the operating system's `shutdown` command, protects cancellation
//! with a salted PBKDF2 password, and keeps a timestamped activity log.
//!
//! # Architecture
//!
//! - **Services**: [`Scheduler`] owns the one outstanding [`ScheduleEntry`]
//!   and drives a [`CommandExecutor`]; [`CredentialStore`] persists
//!   [`UserSettings`]; [`ActivityLog`] appends and tails the history file
//! - **Controller** ([`controller`]): complete user requests with password
//!   gating, activity recording and [`Outcome`] notifications
//! - **Display Wrappers** ([`display`]): status line, tray text and local
//!   time formatting
//!
//! Every piece of state lives in the data directory chosen by
//! [`ControllerBuilder`], so a restarted process picks up where the last one
//! left off.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sundown_core::{ControllerBuilder, PasswordInput, ScheduleRequest, ScheduledAction};
//! use jiff::{SignedDuration, Timestamp};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut controller = ControllerBuilder::new()
//!     .with_data_dir(Some("/tmp/sundown"))
//!     .build()
//!     .await?;
//!
//! // Cancelling requires a password, so set one first
//! controller
//!     .set_password(&PasswordInput::confirmed("hunter2", "hunter2"))
//!     .await?;
//!
//! let when = Timestamp::now() + SignedDuration::from_hours(1);
//! let outcome = controller
//!     .schedule(&ScheduleRequest::new(when, ScheduledAction::Hibernate))
//!     .await?;
//! println!("{outcome}");
//!
//! for line in controller.recent_activity(3).await {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod activity_log;
pub mod controller;
pub mod credentials;
pub mod display;
pub mod error;
pub mod executor;
pub mod models;
pub mod params;
pub mod scheduler;
mod storage;

// Re-export commonly used types
pub use activity_log::ActivityLog;
pub use controller::{
    Controller, ControllerBuilder, Notification, Outcome, PasswordPrompt, Severity,
};
pub use credentials::CredentialStore;
pub use display::{LocalDateTime, OperationStatus, ScheduleStatus, TrayStatus};
pub use error::{Result, SundownError};
pub use executor::{CommandExecutor, ProcessExecutor};
pub use models::{ScheduleEntry, ScheduledAction, UserSettings};
pub use params::{parse_delay, parse_time, PasswordInput, ScheduleRequest};
pub use scheduler::{Scheduler, SchedulerState};
