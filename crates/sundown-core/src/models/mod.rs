//! Data models for scheduled power actions and user settings.
//!
//! This module contains the domain types shared by every service in the
//! crate:
//!
//! - [`ScheduledAction`]: the four power-state changes the system can request
//! - [`ScheduleEntry`]: the single outstanding scheduled action
//! - [`UserSettings`]: credential material and display preferences
//!
//! All types serialize with the camelCase field names used by the on-disk
//! JSON files, so a settings or schedule file written by one version can be
//! read by the next.
//!
//! # Examples
//!
//! ```rust
//! use sundown_core::models::{ScheduleEntry, ScheduledAction};
//! use jiff::{SignedDuration, Timestamp};
//!
//! let when = Timestamp::now() + SignedDuration::from_mins(30);
//! let entry = ScheduleEntry::new(when, ScheduledAction::Restart);
//! assert!(entry.enabled);
//! assert_eq!(entry.action, ScheduledAction::Restart);
//! println!("{entry}");
//! ```

mod action;
mod entry;
mod settings;

#[cfg(test)]
mod tests;

pub use action::ScheduledAction;
pub use entry::ScheduleEntry;
pub use settings::UserSettings;
