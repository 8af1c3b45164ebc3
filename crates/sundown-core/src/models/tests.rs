use jiff::Timestamp;
use serde_json::json;

use super::{ScheduleEntry, ScheduledAction, UserSettings};

fn create_test_entry() -> ScheduleEntry {
    ScheduleEntry::new(
        Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        ScheduledAction::Shutdown,
    )
}

#[test]
fn test_action_serializes_as_name() {
    for action in ScheduledAction::ALL {
        let value = serde_json::to_value(action).unwrap();
        assert_eq!(value, json!(action.as_str()));
    }
}

#[test]
fn test_new_entries_get_distinct_ids() {
    let first = create_test_entry();
    let second = create_test_entry();
    assert_ne!(first.id, second.id);
    assert!(first.enabled);
    assert!(first.recurrence.is_none());
}

#[test]
fn test_entry_uses_camel_case_fields() {
    let entry = create_test_entry()
        .with_name("Nightly")
        .with_recurrence(Some("daily".to_string()));
    let value = serde_json::to_value(&entry).unwrap();

    assert_eq!(value["name"], json!("Nightly"));
    assert_eq!(value["time"], json!("2022-01-01T00:00:00Z"));
    assert_eq!(value["enabled"], json!(true));
    assert_eq!(value["action"], json!("Shutdown"));
    assert_eq!(value["recurrence"], json!("daily"));
    assert_eq!(value["id"], json!(entry.id.to_string()));
}

#[test]
fn test_entry_reads_time_with_offset() {
    let raw = json!({
        "id": "6f1c2a34-1d2b-4c55-9a0e-3f6b1f2a9e10",
        "name": null,
        "time": "2022-01-01T09:00:00+09:00",
        "enabled": true,
        "action": "Hibernate",
        "recurrence": null
    });
    let entry: ScheduleEntry = serde_json::from_value(raw).unwrap();
    assert_eq!(entry.time, Timestamp::from_second(1640995200).unwrap());
    assert_eq!(entry.action, ScheduledAction::Hibernate);
}

#[test]
fn test_entry_display_falls_back_to_id() {
    let entry = create_test_entry();
    let output = entry.to_string();
    assert!(output.starts_with(&entry.id.to_string()));
    assert!(output.contains("@ 2022-01-01 00:00:00Z (Shutdown) Enabled"));

    let named = entry.with_name("Nightly");
    assert!(named.to_string().starts_with("Nightly @"));
}

#[test]
fn test_settings_defaults() {
    let settings = UserSettings::default();
    assert!(!settings.has_password());
    assert!(!settings.is_dark_mode);
    assert_eq!(settings.last_scheduled_action, ScheduledAction::Shutdown);
    assert!(settings.last_scheduled_time.is_none());
}

#[test]
fn test_settings_partial_file_uses_field_defaults() {
    let settings: UserSettings = serde_json::from_value(json!({ "isDarkMode": true })).unwrap();
    assert!(settings.is_dark_mode);
    assert!(!settings.has_password());
}

#[test]
fn test_settings_field_names() {
    let settings = UserSettings {
        password_hash: Some("aGFzaA==".to_string()),
        password_salt: Some("c2FsdA==".to_string()),
        is_dark_mode: true,
        last_scheduled_time: Some(Timestamp::from_second(1640995200).unwrap()),
        last_scheduled_action: ScheduledAction::Restart,
    };
    let value = serde_json::to_value(&settings).unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "passwordHash",
        "passwordSalt",
        "isDarkMode",
        "lastScheduledTime",
        "lastScheduledAction",
    ] {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert_eq!(value["lastScheduledAction"], json!("Restart"));
}

#[test]
fn test_has_password_requires_both_fields() {
    let only_hash = UserSettings {
        password_hash: Some("aGFzaA==".to_string()),
        ..Default::default()
    };
    assert!(!only_hash.has_password());

    let blank_salt = UserSettings {
        password_hash: Some("aGFzaA==".to_string()),
        password_salt: Some("   ".to_string()),
        ..Default::default()
    };
    assert!(!blank_salt.has_password());

    let both = UserSettings {
        password_hash: Some("aGFzaA==".to_string()),
        password_salt: Some("c2FsdA==".to_string()),
        ..Default::default()
    };
    assert!(both.has_password());
}
