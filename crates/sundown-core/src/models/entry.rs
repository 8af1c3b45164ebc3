use std::fmt;

use jiff::{tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ScheduledAction;

/// The single outstanding scheduled power action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Opaque identifier assigned at creation
    pub id: Uuid,

    /// Optional display label
    #[serde(default)]
    pub name: Option<String>,

    /// Point in time the action should occur
    pub time: Timestamp,

    /// Always true for an entry that exists; kept for forward compatibility
    #[serde(default = "enabled_default")]
    pub enabled: bool,

    /// Action to perform at `time`
    #[serde(default)]
    pub action: ScheduledAction,

    /// Reserved free-text recurrence descriptor, not interpreted
    #[serde(default)]
    pub recurrence: Option<String>,
}

fn enabled_default() -> bool {
    true
}

impl ScheduleEntry {
    /// Creates an enabled entry with a fresh identifier.
    pub fn new(time: Timestamp, action: ScheduledAction) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            time,
            enabled: true,
            action,
            recurrence: None,
        }
    }

    /// Sets the display label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the reserved recurrence descriptor.
    pub fn with_recurrence(mut self, recurrence: Option<String>) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Label shown to the user, falling back to the identifier.
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} ({}) {}",
            self.label(),
            self.time
                .to_zoned(TimeZone::UTC)
                .strftime("%Y-%m-%d %H:%M:%SZ"),
            self.action,
            if self.enabled { "Enabled" } else { "Disabled" }
        )
    }
}
