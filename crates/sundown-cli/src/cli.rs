//! Command handlers and clap argument wrappers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so `sundown-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Controller → Outcome → Renderer
//! ```

use std::time::Duration;

use anyhow::Result;
use clap::{ArgGroup, Args, ValueEnum};
use jiff::Timestamp;
use log::debug;
use sundown_core::{
    controller::DEFAULT_RECENT_ACTIVITY, parse_delay, parse_time, Controller, OperationStatus,
    PasswordInput, ScheduleRequest, ScheduledAction, SundownError,
};

use crate::{args::Commands, prompt::{request_new_password, CliPrompt}, renderer::TerminalRenderer};

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

#[derive(Args)]
#[command(group(ArgGroup::new("when").required(true).args(["at", "delay"])))]
pub struct ScheduleArgs {
    #[arg(
        long,
        value_name = "TIME",
        help = "Absolute time, RFC 3339 or local 'YYYY-MM-DD HH:MM[:SS]'"
    )]
    pub at: Option<String>,
    #[arg(
        long = "in",
        value_name = "DURATION",
        help = "Delay from now, e.g. '90m', '1h 30m' or 'PT2H'"
    )]
    pub delay: Option<String>,
    #[arg(short, long, value_enum, default_value_t = ActionArg::Shutdown)]
    pub action: ActionArg,
    #[arg(short, long, help = "Label shown in status output")]
    pub name: Option<String>,
}

impl TryFrom<ScheduleArgs> for ScheduleRequest {
    type Error = SundownError;

    fn try_from(val: ScheduleArgs) -> Result<Self, Self::Error> {
        let time = match (val.at, val.delay) {
            (Some(at), _) => parse_time(&at)?,
            (None, Some(delay)) => parse_delay(&delay, Timestamp::now())?,
            (None, None) => {
                return Err(SundownError::invalid_input("time")
                    .with_reason("either --at or --in is required"))
            }
        };
        Ok(ScheduleRequest {
            name: val.name,
            ..ScheduleRequest::new(time, val.action.into())
        })
    }
}

#[derive(Args)]
pub struct CancelArgs {
    #[arg(short, long, help = "Password; prompted for when omitted")]
    pub password: Option<String>,
}

impl From<CancelArgs> for CliPrompt {
    fn from(val: CancelArgs) -> Self {
        val.password.map_or(CliPrompt::Stdin, CliPrompt::Provided)
    }
}

#[derive(Args)]
pub struct NowArgs {
    #[arg(value_enum)]
    pub action: ActionArg,
}

#[derive(Args)]
pub struct PasswordArgs {
    #[arg(short, long, help = "New password; prompted for when omitted")]
    pub password: Option<String>,
    #[arg(short, long, requires = "password", help = "Repeat the new password")]
    pub confirm: Option<String>,
}

#[derive(Args)]
pub struct LogArgs {
    #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT_ACTIVITY)]
    pub count: usize,
}

#[derive(Args)]
pub struct StatusArgs {
    #[arg(short, long, help = "Refresh every second until the action is due")]
    pub watch: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    Shutdown,
    #[value(alias = "reboot")]
    Restart,
    #[value(aliases = ["logout", "log-off"])]
    Logoff,
    Hibernate,
}

impl From<ActionArg> for ScheduledAction {
    fn from(val: ActionArg) -> Self {
        match val {
            ActionArg::Shutdown => ScheduledAction::Shutdown,
            ActionArg::Restart => ScheduledAction::Restart,
            ActionArg::Logoff => ScheduledAction::Logoff,
            ActionArg::Hibernate => ScheduledAction::Hibernate,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub struct Cli {
    controller: Controller,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(controller: Controller, renderer: TerminalRenderer) -> Self {
        Self {
            controller,
            renderer,
        }
    }

    pub async fn run(&mut self, command: Option<Commands>) -> Result<()> {
        match command {
            Some(Commands::Schedule(args)) => self.schedule(args).await,
            Some(Commands::Cancel(args)) => self.cancel(args).await,
            Some(Commands::Now(args)) => self.perform_now(args.action).await,
            Some(Commands::Password(args)) => self.set_password(args).await,
            Some(Commands::Theme) => self.toggle_theme().await,
            Some(Commands::Log(args)) => self.show_log(args.count).await,
            Some(Commands::Status(args)) if args.watch => self.watch_status().await,
            Some(Commands::Status(_)) | None => self.show_overview().await,
        }
    }

    /// Renders a domain error as an operation status.
    pub fn report(&self, error: &SundownError) -> Result<()> {
        self.renderer
            .render_status(&OperationStatus::from(error))
    }

    async fn schedule(&mut self, args: ScheduleArgs) -> Result<()> {
        let request = ScheduleRequest::try_from(args)?;
        let outcome = self.controller.schedule(&request).await?;
        self.renderer.render_outcome(&outcome)
    }

    async fn cancel(&mut self, args: CancelArgs) -> Result<()> {
        let prompt = CliPrompt::from(args);
        match self.controller.cancel(&prompt).await? {
            Some(outcome) => self.renderer.render_outcome(&outcome),
            None => self
                .renderer
                .render("## Cancel\n\nNo password entered; nothing was canceled.\n"),
        }
    }

    async fn perform_now(&mut self, action: ActionArg) -> Result<()> {
        let outcome = self.controller.perform_immediate(action.into()).await?;
        self.renderer.render_outcome(&outcome)
    }

    async fn set_password(&mut self, args: PasswordArgs) -> Result<()> {
        let input = match (args.password, args.confirm) {
            (Some(password), Some(confirm)) => PasswordInput::confirmed(password, confirm),
            (Some(password), None) => PasswordInput::new(password),
            (None, _) => request_new_password().await,
        };
        let outcome = self.controller.set_password(&input).await?;
        self.renderer.render_outcome(&outcome)
    }

    async fn toggle_theme(&mut self) -> Result<()> {
        let dark = self.controller.toggle_theme().await?;
        let mode = if dark { "Dark" } else { "Light" };
        self.renderer
            .render_status(&OperationStatus::success("Theme", format!("{mode} mode enabled.")))
    }

    async fn show_log(&self, count: usize) -> Result<()> {
        let lines = self.controller.recent_activity(count).await;
        self.renderer.render(&activity_markdown(&lines))
    }

    async fn show_overview(&self) -> Result<()> {
        let lines = self
            .controller
            .recent_activity(DEFAULT_RECENT_ACTIVITY)
            .await;
        let status = self.controller.status_text(Timestamp::now());
        self.renderer.render(&format!(
            "## Status\n\n{status}\n\n{}",
            activity_markdown(&lines)
        ))
    }

    /// Prints the status line every second until the pending action is due
    /// or the user presses Ctrl-C.
    async fn watch_status(&self) -> Result<()> {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let now = Timestamp::now();
                    self.renderer
                        .render(&format!("{}\n", self.controller.status_text(now)))?;
                    let due = match self.controller.current() {
                        Some(entry) => entry.time <= now,
                        None => true,
                    };
                    if due {
                        return Ok(());
                    }
                }
                _ = &mut ctrl_c => {
                    debug!("Status watch interrupted");
                    return Ok(());
                }
            }
        }
    }
}

fn activity_markdown(lines: &[String]) -> String {
    if lines.is_empty() {
        return "## Recent Activity\n\nNo activity recorded.\n".to_string();
    }
    let mut output = String::from("## Recent Activity\n\n");
    for line in lines {
        output.push_str(&format!("- {line}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_args(at: Option<&str>, delay: Option<&str>) -> ScheduleArgs {
        ScheduleArgs {
            at: at.map(String::from),
            delay: delay.map(String::from),
            action: ActionArg::Restart,
            name: Some("Patch night".to_string()),
        }
    }

    #[test]
    fn test_schedule_args_with_delay() {
        let before = Timestamp::now();
        let request = ScheduleRequest::try_from(schedule_args(None, Some("90m"))).unwrap();
        assert_eq!(request.action, ScheduledAction::Restart);
        assert_eq!(request.name.as_deref(), Some("Patch night"));
        assert!(request.time >= before + jiff::SignedDuration::from_mins(90));
    }

    #[test]
    fn test_schedule_args_with_absolute_time() {
        let request =
            ScheduleRequest::try_from(schedule_args(Some("2030-01-01T00:00:00Z"), None)).unwrap();
        assert_eq!(request.time.to_string(), "2030-01-01T00:00:00Z");
    }

    #[test]
    fn test_schedule_args_invalid() {
        assert!(ScheduleRequest::try_from(schedule_args(None, None)).is_err());
        assert!(ScheduleRequest::try_from(schedule_args(Some("later"), None)).is_err());
    }

    #[test]
    fn test_cancel_args_into_prompt() {
        let provided = CliPrompt::from(CancelArgs {
            password: Some("pw".to_string()),
        });
        assert!(matches!(provided, CliPrompt::Provided(ref p) if p == "pw"));
        assert!(matches!(
            CliPrompt::from(CancelArgs { password: None }),
            CliPrompt::Stdin
        ));
    }

    #[test]
    fn test_activity_markdown() {
        assert!(activity_markdown(&[]).contains("No activity recorded."));
        let output = activity_markdown(&["2025-01-01 10:00:00 - Password updated.".to_string()]);
        assert!(output.ends_with("- 2025-01-01 10:00:00 - Password updated.\n"));
    }
}
