//! Status text for the current schedule.

use std::fmt;

use jiff::Timestamp;

use super::{Countdown, LocalDateTime, LocalTime};
use crate::models::ScheduleEntry;

/// Tooltip shown while nothing is scheduled.
pub const IDLE_TRAY_TEXT: &str = "Shutdown Scheduler - idle";

/// One-line status: what is scheduled, when, and how long is left.
///
/// Recomputed on every refresh tick; it only reads the entry.
pub struct ScheduleStatus<'a> {
    pub entry: Option<&'a ScheduleEntry>,
    pub now: Timestamp,
}

impl fmt::Display for ScheduleStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(entry) = self.entry else {
            return write!(f, "No shutdown scheduled.");
        };

        write!(
            f,
            "{} scheduled for {}",
            entry.action,
            LocalDateTime(&entry.time)
        )?;
        let remaining = entry.time.duration_since(self.now);
        if remaining.is_positive() {
            write!(f, " ({} remaining)", Countdown(remaining))
        } else {
            write!(f, " (pending)")
        }
    }
}

/// Short tray tooltip for the current schedule.
pub struct TrayStatus<'a>(pub Option<&'a ScheduleEntry>);

impl fmt::Display for TrayStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(entry) => write!(f, "{} at {}", entry.action, LocalTime(&entry.time)),
            None => write!(f, "{IDLE_TRAY_TEXT}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;
    use crate::models::ScheduledAction;

    fn entry_at(time: Timestamp) -> ScheduleEntry {
        ScheduleEntry::new(time, ScheduledAction::Restart)
    }

    #[test]
    fn test_idle_texts() {
        let status = ScheduleStatus {
            entry: None,
            now: Timestamp::now(),
        };
        assert_eq!(status.to_string(), "No shutdown scheduled.");
        assert_eq!(TrayStatus(None).to_string(), "Shutdown Scheduler - idle");
    }

    #[test]
    fn test_pending_with_time_left() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let entry = entry_at(now + SignedDuration::from_secs(3725));
        let status = ScheduleStatus {
            entry: Some(&entry),
            now,
        }
        .to_string();

        assert!(status.starts_with("Restart scheduled for "));
        assert!(status.ends_with(" (01:02:05 remaining)"));
        assert!(TrayStatus(Some(&entry)).to_string().starts_with("Restart at "));
    }

    #[test]
    fn test_pending_after_time_passed() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let entry = entry_at(now - SignedDuration::from_secs(1));
        let status = ScheduleStatus {
            entry: Some(&entry),
            now,
        };
        assert!(status.to_string().ends_with(" (pending)"));
    }
}
