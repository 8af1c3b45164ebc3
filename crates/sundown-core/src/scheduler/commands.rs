//! Mapping from power actions to command-line arguments.

use jiff::Timestamp;

use crate::models::ScheduledAction;

/// Longest delay the external command accepts: ten years.
pub const MAX_DELAY_SECONDS: i64 = 315_360_000;

/// Arguments that abort a pending action.
pub const ABORT_ARGUMENTS: &str = "/a";

/// Whole seconds from `now` until `target`, rounded up and clamped to
/// `[0, MAX_DELAY_SECONDS]`.
pub fn delay_seconds(target: Timestamp, now: Timestamp) -> i64 {
    let remaining = target.duration_since(now);
    let mut seconds = remaining.as_secs();
    if remaining.subsec_nanos() > 0 {
        seconds = seconds.saturating_add(1);
    }
    seconds.clamp(0, MAX_DELAY_SECONDS)
}

/// Arguments for a delayed action. Log off and hibernate have no delay
/// switch and run immediately regardless of `delay`.
pub fn scheduled_arguments(action: ScheduledAction, delay: i64) -> String {
    match action {
        ScheduledAction::Shutdown => format!("/s /t {delay}"),
        ScheduledAction::Restart => format!("/r /t {delay}"),
        ScheduledAction::Logoff => "/l".to_string(),
        ScheduledAction::Hibernate => "/h".to_string(),
    }
}

/// Arguments for an action that should happen right now.
pub fn immediate_arguments(action: ScheduledAction) -> String {
    scheduled_arguments(action, 0)
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    fn base() -> Timestamp {
        Timestamp::from_second(1_700_000_000).unwrap()
    }

    #[test]
    fn test_delay_whole_seconds() {
        let now = base();
        assert_eq!(delay_seconds(now + SignedDuration::from_secs(600), now), 600);
    }

    #[test]
    fn test_delay_rounds_partial_seconds_up() {
        let now = base();
        assert_eq!(delay_seconds(now + SignedDuration::from_millis(1), now), 1);
        assert_eq!(delay_seconds(now + SignedDuration::from_millis(599_001), now), 600);
    }

    #[test]
    fn test_delay_is_clamped() {
        let now = base();
        assert_eq!(delay_seconds(now - SignedDuration::from_secs(5), now), 0);
        let far = now + SignedDuration::from_hours(24 * 365 * 20);
        assert_eq!(delay_seconds(far, now), MAX_DELAY_SECONDS);
    }

    #[test]
    fn test_scheduled_arguments() {
        assert_eq!(scheduled_arguments(ScheduledAction::Shutdown, 600), "/s /t 600");
        assert_eq!(scheduled_arguments(ScheduledAction::Restart, 42), "/r /t 42");
        assert_eq!(scheduled_arguments(ScheduledAction::Logoff, 600), "/l");
        assert_eq!(scheduled_arguments(ScheduledAction::Hibernate, 600), "/h");
    }

    #[test]
    fn test_immediate_arguments() {
        assert_eq!(immediate_arguments(ScheduledAction::Shutdown), "/s /t 0");
        assert_eq!(immediate_arguments(ScheduledAction::Restart), "/r /t 0");
        assert_eq!(immediate_arguments(ScheduledAction::Logoff), "/l");
        assert_eq!(immediate_arguments(ScheduledAction::Hibernate), "/h");
    }
}
