//! Results handed back to the presentation after a successful request.

use std::fmt;

/// How prominently a notification should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A balloon/toast style message for the presentation to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// A completed request: the notification to show plus anything that went
/// wrong after the state change had already happened (for example an
/// activity log that could not be written).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notification: Notification,
    pub warnings: Vec<String>,
}

impl Outcome {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.notification.severity {
            Severity::Info => "",
            Severity::Warning => "⚠ ",
        };
        writeln!(f, "## {}{}", marker, self.notification.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.notification.message)?;
        if !self.warnings.is_empty() {
            writeln!(f)?;
            for warning in &self.warnings {
                writeln!(f, "- *Warning:* {warning}")?;
            }
        }
        Ok(())
    }
}
