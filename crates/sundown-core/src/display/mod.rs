//! Display wrappers for user-facing text.
//!
//! Domain models implement [`std::fmt::Display`] directly; the wrappers here
//! add the context a presentation needs (local time zone, remaining time,
//! success/failure framing) without the presentation having to know the
//! formatting rules.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │   Formatted     │
//! │ (ScheduleEntry) │───▶│ (ScheduleStatus)│───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`datetime`]: local date/time and countdown formatting
//! - [`schedule`]: status line and tray text for the current schedule
//! - [`status`]: success/failure framing for operation results

pub mod datetime;
pub mod schedule;
pub mod status;

pub use datetime::{Countdown, LocalDateTime, LocalTime};
pub use schedule::{ScheduleStatus, TrayStatus};
pub use status::OperationStatus;
