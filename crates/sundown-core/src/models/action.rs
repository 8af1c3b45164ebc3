use std::fmt;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the supported power-state changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ScheduledAction {
    /// Power the machine off
    #[default]
    Shutdown,

    /// Power cycle the machine
    Restart,

    /// End the current user session
    Logoff,

    /// Suspend to disk
    Hibernate,
}

impl ScheduledAction {
    /// All actions, in menu order.
    pub const ALL: [ScheduledAction; 4] = [
        ScheduledAction::Shutdown,
        ScheduledAction::Restart,
        ScheduledAction::Logoff,
        ScheduledAction::Hibernate,
    ];

    /// Stable name used in files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduledAction::Shutdown => "Shutdown",
            ScheduledAction::Restart => "Restart",
            ScheduledAction::Logoff => "Logoff",
            ScheduledAction::Hibernate => "Hibernate",
        }
    }

    /// Whether the OS command takes a delay for this action, leaving a timer
    /// that `/a` can abort.
    pub fn has_delay_switch(&self) -> bool {
        matches!(self, ScheduledAction::Shutdown | ScheduledAction::Restart)
    }

    /// Lowercase noun used inside sentences ("Scheduled restart for ...").
    pub fn noun(&self) -> &'static str {
        match self {
            ScheduledAction::Shutdown => "shutdown",
            ScheduledAction::Restart => "restart",
            ScheduledAction::Logoff => "log off",
            ScheduledAction::Hibernate => "hibernate",
        }
    }

    /// Verb used in "System will <verb> at ...".
    pub fn verb(&self) -> &'static str {
        match self {
            ScheduledAction::Shutdown => "shut down",
            ScheduledAction::Restart => "restart",
            ScheduledAction::Logoff => "log off",
            ScheduledAction::Hibernate => "hibernate",
        }
    }
}

impl fmt::Display for ScheduledAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
