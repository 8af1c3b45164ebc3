//! Terminal rendering module for rich markdown output
//!
//! Outcomes and statuses arrive as small markdown documents; termimad styles
//! them unless plain text was requested.

use anyhow::Result;
use sundown_core::{OperationStatus, Outcome, Severity};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.render_with_header(markdown, Color::Blue)
    }

    /// Render an outcome, highlighting warnings in its header.
    pub fn render_outcome(&self, outcome: &Outcome) -> Result<()> {
        let header = match outcome.notification.severity {
            Severity::Info => Color::Green,
            Severity::Warning => Color::Yellow,
        };
        self.render_with_header(&outcome.to_string(), header)
    }

    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        if self.rich_enabled && !status.success {
            let mut skin = self.skin.clone();
            skin.bold.set_fg(Color::Red);
            skin.print_inline(status.to_string().trim_end());
            println!();
            return Ok(());
        }
        self.render(&status.to_string())
    }

    fn render_with_header(&self, markdown: &str, header: Color) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        // Headers keep their hash marks; termimad would strip them
        let code = match header {
            Color::Green => 32,
            Color::Yellow => 33,
            _ => 34,
        };
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[{code}m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
