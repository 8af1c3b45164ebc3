use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ScheduledAction;

/// Persistent user state: credential material and display preferences.
///
/// `password_hash` and `password_salt` are written together by
/// [`crate::CredentialStore::set_password`]; a file where only one of them is
/// present counts as "no password configured".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Base64 PBKDF2 derived key
    pub password_hash: Option<String>,

    /// Base64 salt used for `password_hash`
    pub password_salt: Option<String>,

    pub is_dark_mode: bool,

    /// Informational mirror of the last scheduled entry
    pub last_scheduled_time: Option<Timestamp>,

    pub last_scheduled_action: ScheduledAction,
}

impl UserSettings {
    /// Whether both halves of the credential material are present.
    pub fn has_password(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.password_hash) && present(&self.password_salt)
    }
}
