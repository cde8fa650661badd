//! Line-oriented command session driving a single [`TimeOfDay`]
//!
//! A session reads one command per line from any `BufRead`, reads the next
//! line as the integer argument when the command takes one, applies it, and
//! writes a status line to any `Write`. Everything the loop depends on (input,
//! output, prompt, whether it is interactive, the reference instants) is held
//! by the session itself, so several sessions can run side by side and tests
//! can drive one over in-memory buffers.
//!
//! Status lines look like `14:15 | midnight: +855 | noon: +135`. A ` (!)`
//! marker follows the time when the stored minute count has left the day,
//! which only the relative shifts and `set_hour_pm(12)` can cause.

use crate::command::{parse_argument, Command, USAGE};
use crate::config::ClockConfig;
use crate::errors::ClockError;
use crate::time_of_day::{TimeOfDay, MINUTES_PER_DAY};
use std::io::{BufRead, Write};

pub const DEFAULT_PROMPT: &str = "> ";
pub const ARGUMENT_PROMPT: &str = "  value: ";
pub const INCONSISTENT_MARKER: &str = " (!)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Recognized commands that were executed, `q` included.
    pub commands: usize,
    /// Out-of-range arguments and unrecognized commands.
    pub errors: usize,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    time: TimeOfDay,
    references: Vec<(String, TimeOfDay)>,
    interactive: bool,
    prompt: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, time: TimeOfDay, references: Vec<(String, TimeOfDay)>) -> Self {
        Self {
            input,
            output,
            time,
            references,
            interactive: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Builds a session from a validated configuration. `interactive` is used
    /// when the configuration leaves the choice open.
    pub fn from_config(
        input: R,
        output: W,
        config: &ClockConfig,
        interactive: bool,
    ) -> Result<Self, ClockError> {
        let references = config.reference_instants()?;
        Ok(Self::new(input, output, config.initial_time(), references)
            .with_interactive(config.session.interactive.unwrap_or(interactive))
            .with_prompt(config.session.prompt.clone()))
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn time(&self) -> &TimeOfDay {
        &self.time
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `q` or end of input.
    pub fn run(&mut self) -> Result<SessionSummary, ClockError> {
        let mut summary = SessionSummary::default();
        log::info!(
            "Session started ({}, {} mode)",
            if self.interactive { "interactive" } else { "replay" },
            if self.time.is_mode_24_hour() { "24-hour" } else { "12-hour" }
        );

        loop {
            if self.interactive {
                write!(self.output, "{}", self.prompt)?;
                self.output.flush()?;
            }

            let Some(line) = self.read_line()? else {
                log::debug!("End of input");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            if !self.interactive {
                writeln!(self.output, "{}{}", self.prompt, line)?;
            }

            let Some(command) = Command::from_line(&line) else {
                log::warn!("Unrecognized command: {:?}", line.trim());
                writeln!(self.output, "{}", USAGE)?;
                summary.errors += 1;
                continue;
            };

            summary.commands += 1;
            if command == Command::Quit {
                break;
            }

            let argument = if command.takes_argument() {
                self.read_argument()?
            } else {
                0
            };
            log::debug!("Dispatching {} with argument {}", command.name(), argument);

            if let Err(e) = command.apply(&mut self.time, argument) {
                log::warn!("{} rejected: {}", command.name(), e);
                writeln!(self.output, "Error: {}", e)?;
                summary.errors += 1;
            }

            let status = self.status_line();
            writeln!(self.output, "{}", status)?;
        }

        self.output.flush()?;
        log::info!(
            "Session finished: {} commands, {} errors",
            summary.commands,
            summary.errors
        );
        Ok(summary)
    }

    /// The current time, the consistency marker, and the signed difference to
    /// each reference instant.
    pub fn status_line(&self) -> String {
        let mut status = format!("{}{}", self.time, consistency_marker(&self.time));
        for (label, reference) in &self.references {
            status.push_str(&format!(" | {}: {:+}", label, self.time.compare_to(reference)));
        }
        status
    }

    fn read_argument(&mut self) -> Result<i32, ClockError> {
        if self.interactive {
            write!(self.output, "{}", ARGUMENT_PROMPT)?;
            self.output.flush()?;
        }
        let line = self.read_line()?.unwrap_or_default();
        if !self.interactive {
            writeln!(self.output, "{}{}", ARGUMENT_PROMPT, line)?;
        }
        Ok(parse_argument(&line))
    }

    fn read_line(&mut self) -> Result<Option<String>, ClockError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 becomes U+FFFD, which is neither a command nor a number.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Returns [`INCONSISTENT_MARKER`] when the stored minute count lies outside
/// the day, otherwise `""`.
pub fn consistency_marker(time: &TimeOfDay) -> &'static str {
    if (0..MINUTES_PER_DAY).contains(&time.minutes_since_midnight()) {
        ""
    } else {
        INCONSISTENT_MARKER
    }
}
