//! Password derivation, verification and settings persistence.
//!
//! Passwords are never stored. [`CredentialStore::set_password`] draws a
//! fresh 16 byte salt from the OS random source and stores the base64 salt
//! together with a 32 byte PBKDF2-HMAC-SHA256 key derived with 100,000
//! iterations. Verification re-derives the key and compares in constant
//! time.
//!
//! ```rust,no_run
//! use sundown_core::CredentialStore;
//!
//! # async fn example() -> sundown_core::Result<()> {
//! let store = CredentialStore::new("/tmp/sundown/settings.json");
//! let mut settings = store.load().await;
//! store.set_password(&mut settings, "hunter2").await?;
//! assert!(store.verify(&settings, "hunter2").await);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use log::warn;
use pbkdf2::pbkdf2_hmac;
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::{
    error::Result,
    models::UserSettings,
    storage::{read_json, run_blocking, write_json_atomic},
};

/// Salt length in bytes.
pub const SALT_SIZE: usize = 16;
/// Derived key length in bytes.
pub const KEY_SIZE: usize = 32;
/// PBKDF2 iteration count.
pub const ITERATIONS: u32 = 100_000;

/// Owner of the settings file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the settings file, falling back to defaults when it is missing
    /// or cannot be parsed.
    pub async fn load(&self) -> UserSettings {
        let path = self.path.clone();
        match run_blocking(move || read_json::<UserSettings>(&path)).await {
            Ok(Some(settings)) => settings,
            Ok(None) => UserSettings::default(),
            Err(e) => {
                warn!("Ignoring unreadable settings {}: {}", self.path.display(), e);
                UserSettings::default()
            }
        }
    }

    /// Writes the settings file.
    ///
    /// # Errors
    ///
    /// Returns `SundownError::FileSystem` or `SundownError::Serialization`
    /// when the file cannot be written.
    pub async fn save(&self, settings: &UserSettings) -> Result<()> {
        let path = self.path.clone();
        let settings = settings.clone();
        run_blocking(move || write_json_atomic(&path, &settings)).await
    }

    /// Replaces the stored credential with one derived from `plaintext` and
    /// saves the settings.
    ///
    /// `settings` is only updated once the file has been written, so a failed
    /// save leaves both the file and the caller's copy on the old credential.
    pub async fn set_password(&self, settings: &mut UserSettings, plaintext: &str) -> Result<()> {
        let plaintext = plaintext.to_string();
        let (salt, key) = run_blocking(move || {
            let mut salt = [0u8; SALT_SIZE];
            OsRng.fill_bytes(&mut salt);
            let key = derive_key(&plaintext, &salt);
            Ok((salt, key))
        })
        .await?;

        let updated = UserSettings {
            password_salt: Some(B64.encode(salt)),
            password_hash: Some(B64.encode(key)),
            ..settings.clone()
        };
        self.save(&updated).await?;
        *settings = updated;
        Ok(())
    }

    /// Checks `candidate` against the stored credential on the blocking pool.
    pub async fn verify(&self, settings: &UserSettings, candidate: &str) -> bool {
        let settings = settings.clone();
        let candidate = candidate.to_string();
        run_blocking(move || Ok(verify_password(&settings, &candidate)))
            .await
            .unwrap_or(false)
    }
}

/// Checks `candidate` against the stored credential.
///
/// Returns false when no password is configured, when the stored material
/// cannot be decoded, or when the stored key is not [`KEY_SIZE`] bytes.
pub fn verify_password(settings: &UserSettings, candidate: &str) -> bool {
    if !settings.has_password() {
        return false;
    }
    let (Some(hash), Some(salt)) = (&settings.password_hash, &settings.password_salt) else {
        return false;
    };
    let (Ok(expected), Ok(salt)) = (B64.decode(hash.trim()), B64.decode(salt.trim())) else {
        return false;
    };
    if expected.len() != KEY_SIZE {
        return false;
    }

    let actual = derive_key(candidate, &salt);
    actual.as_slice().ct_eq(expected.as_slice()).into()
}

fn derive_key(password: &str, salt: &[u8]) -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, ITERATIONS, &mut key);
    key
}
