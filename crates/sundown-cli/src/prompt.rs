//! Password entry for commands that need one.
//!
//! On a terminal the password is typed without echo through dialoguer.
//! Piped input is read one line per answer.

use std::io::{self, BufRead, IsTerminal};

use async_trait::async_trait;
use dialoguer::Password;
use log::warn;
use sundown_core::{PasswordInput, PasswordPrompt};

/// Where a password comes from: the command line or the user.
pub enum CliPrompt {
    Provided(String),
    Stdin,
}

#[async_trait]
impl PasswordPrompt for CliPrompt {
    async fn request_password(&self, title: &str) -> Option<String> {
        match self {
            CliPrompt::Provided(password) => Some(password.clone()),
            CliPrompt::Stdin => {
                let title = title.to_string();
                run_blocking(move || ask_password(&title)).await.flatten()
            }
        }
    }
}

/// Asks for a new password twice. A dismissed prompt yields an empty
/// password, which the controller rejects.
pub async fn request_new_password() -> PasswordInput {
    run_blocking(ask_new_password).await.unwrap_or_default()
}

async fn run_blocking<T, F>(f: F) -> Option<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Password prompt failed: {e}");
            None
        }
    }
}

fn ask_password(title: &str) -> Option<String> {
    if !io::stdin().is_terminal() {
        return read_answer(&mut io::stdin().lock());
    }
    match Password::new().with_prompt(title).interact() {
        Ok(password) => Some(password),
        Err(e) => {
            warn!("Password prompt dismissed: {e}");
            None
        }
    }
}

fn ask_new_password() -> PasswordInput {
    if !io::stdin().is_terminal() {
        return new_password_from(&mut io::stdin().lock());
    }
    match Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm password", "Passwords do not match.")
        .interact()
    {
        Ok(password) => PasswordInput::new(password),
        Err(e) => {
            warn!("Password prompt dismissed: {e}");
            PasswordInput::default()
        }
    }
}

/// One answer per line. End of input means the prompt was dismissed.
fn read_answer<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(e) => {
            warn!("Could not read password: {e}");
            None
        }
    }
}

fn new_password_from<R: BufRead>(reader: &mut R) -> PasswordInput {
    let password = read_answer(reader).unwrap_or_default();
    let confirmation = read_answer(reader).unwrap_or_default();
    PasswordInput::confirmed(password, confirmation)
}
