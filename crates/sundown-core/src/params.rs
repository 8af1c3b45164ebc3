//! Parameter structures for sundown operations
//!
//! Interface-agnostic request types. The CLI converts its clap argument
//! structs into these with `From` so the core stays free of framework
//! derives:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   Controller    │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::str::FromStr;

use jiff::{civil, tz::TimeZone, SignedDuration, Timestamp};

use crate::{
    error::{Result, SundownError},
    models::{ScheduleEntry, ScheduledAction},
};

/// Request to schedule a future power action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    /// When the action should happen
    pub time: Timestamp,
    pub action: ScheduledAction,
    /// Display label; defaults to "Scheduled <action>"
    pub name: Option<String>,
    /// Reserved recurrence descriptor, stored but not interpreted
    pub recurrence: Option<String>,
}

impl ScheduleRequest {
    pub fn new(time: Timestamp, action: ScheduledAction) -> Self {
        Self {
            time,
            action,
            name: None,
            recurrence: None,
        }
    }

    /// Builds a fresh entry with a new identifier.
    pub fn to_entry(&self) -> ScheduleEntry {
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| format!("Scheduled {}", self.action.noun()));
        ScheduleEntry::new(self.time, self.action)
            .with_name(name)
            .with_recurrence(self.recurrence.clone())
    }
}

/// A password typed by the user, with the optional confirmation field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordInput {
    pub password: String,
    pub confirmation: Option<String>,
}

impl PasswordInput {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            confirmation: None,
        }
    }

    pub fn confirmed(password: impl Into<String>, confirmation: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            confirmation: Some(confirmation.into()),
        }
    }

    /// Rejects empty passwords and mismatched confirmations.
    ///
    /// # Errors
    ///
    /// Returns `SundownError::InvalidInput` for the `password` field.
    pub fn validate(&self) -> Result<&str> {
        if self.password.is_empty() {
            return Err(SundownError::invalid_input("password").with_reason("Password cannot be empty."));
        }
        if self
            .confirmation
            .as_deref()
            .is_some_and(|confirmation| confirmation != self.password)
        {
            return Err(SundownError::invalid_input("password").with_reason("Passwords do not match."));
        }
        Ok(&self.password)
    }
}

/// Parses an absolute time.
///
/// Accepts an RFC 3339 timestamp (`2026-10-16T22:30:00+02:00`) or a local
/// date and time in the system time zone (`2026-10-16 22:30`,
/// `2026-10-16T22:30:15`).
///
/// # Errors
///
/// Returns `SundownError::InvalidInput` for the `time` field when the input
/// matches neither form.
pub fn parse_time(input: &str) -> Result<Timestamp> {
    let input = input.trim();
    if let Ok(timestamp) = Timestamp::from_str(input) {
        return Ok(timestamp);
    }

    let normalized = input.replacen(' ', "T", 1);
    let local = civil::DateTime::from_str(&normalized).map_err(|e| {
        SundownError::invalid_input("time").with_reason(format!("cannot parse '{input}': {e}"))
    })?;
    local
        .to_zoned(TimeZone::system())
        .map(|zoned| zoned.timestamp())
        .map_err(|e| SundownError::invalid_input("time").with_reason(e.to_string()))
}

/// Parses a relative delay (`90m`, `1h 30m`, `PT2H`) and adds it to `now`.
///
/// # Errors
///
/// Returns `SundownError::InvalidInput` for the `delay` field when the input
/// is not a duration or the result is out of range.
pub fn parse_delay(input: &str, now: Timestamp) -> Result<Timestamp> {
    let delay = SignedDuration::from_str(input.trim()).map_err(|e| {
        SundownError::invalid_input("delay").with_reason(format!("cannot parse '{input}': {e}"))
    })?;
    now.checked_add(delay)
        .map_err(|e| SundownError::invalid_input("delay").with_reason(e.to_string()))
}
