//! A time-of-day value with 24-hour and 12-hour (AM/PM) display modes.
//!
//! This crate provides the [`TimeOfDay`] value type together with the small
//! amount of machinery needed to exercise it from a terminal.
//!
//! # Architecture Overview
//!
//! - **Value type**: minutes since midnight plus a display mode, with
//!   range-checked setters and relative shifts ([`time_of_day`])
//! - **Commands**: the one-character command set and its argument parsing ([`command`])
//! - **Session**: a line-oriented loop over any reader and writer ([`session`])
//! - **Configuration**: YAML configuration for the session ([`config`])

pub mod command;
pub mod config;
pub mod errors;
pub mod session;
pub mod time_of_day;

pub use command::Command;
pub use config::*;
pub use errors::{ClockError, OutOfRange};
pub use session::{Session, SessionSummary};
pub use time_of_day::TimeOfDay;
