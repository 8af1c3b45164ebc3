//! Success/failure framing for operation results.

use std::fmt;

use crate::error::SundownError;

/// A titled message reporting how a request went.
pub struct OperationStatus {
    pub title: String,
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            success: false,
        }
    }
}

impl From<&SundownError> for OperationStatus {
    fn from(error: &SundownError) -> Self {
        Self::failure(error.title(), error.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} **{}**: {}",
            if self.success { "Success:" } else { "Error:" },
            self.title,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Password", "Password saved successfully.");
        assert_eq!(
            success.to_string(),
            "Success: **Password**: Password saved successfully.\n"
        );

        let failure = OperationStatus::from(&SundownError::AuthenticationFailed);
        let output = failure.to_string();
        assert!(output.starts_with("Error: **Authentication failed**"));
        assert!(output.contains("Incorrect password. Cancellation aborted."));
    }
}
