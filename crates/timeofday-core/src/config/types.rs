//! Configuration type definitions for the time-of-day session
//!
//! Every section is optional. An empty YAML document yields a 24-hour clock
//! compared against midnight and noon, with the session deciding on its own
//! whether it is interactive.

use crate::errors::{ClockError, OutOfRange};
use crate::time_of_day::TimeOfDay;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Number of reference instants the session reports differences against.
pub const REFERENCE_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default)]
    pub clock: ClockSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default = "default_references")]
    pub references: Vec<ReferenceConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockSettings {
    #[serde(default = "default_true")]
    pub mode_24_hour: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// `None` lets the caller decide (interactive unless replaying a fixture).
    #[serde(default)]
    pub interactive: Option<bool>,
}

/// A fixed instant the current time is compared against after each command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub label: String,
    #[serde(default)]
    pub hour: i32,
    #[serde(default)]
    pub minute: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_true() -> bool { true }
fn default_prompt() -> String { "> ".to_string() }
fn default_log_level() -> String { "info".to_string() }

fn default_references() -> Vec<ReferenceConfig> {
    vec![
        ReferenceConfig::new("midnight", 0, 0),
        ReferenceConfig::new("noon", 12, 0),
    ]
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            clock: ClockSettings::default(),
            session: SessionSettings::default(),
            references: default_references(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            mode_24_hour: default_true(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            interactive: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ReferenceConfig {
    pub fn new(label: impl Into<String>, hour: i32, minute: i32) -> Self {
        Self {
            label: label.into(),
            hour,
            minute,
        }
    }

    /// Builds the reference in 24-hour mode through the regular setters, so
    /// bad values are rejected with the same message the session prints.
    pub fn to_time_of_day(&self) -> Result<TimeOfDay, OutOfRange> {
        let mut time = TimeOfDay::new();
        time.set_hour(self.hour)?;
        time.set_minute_of_hour(self.minute)?;
        Ok(time)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ClockError> {
        self.level.parse().map_err(|_| {
            ClockError::ConfigError(format!("Unknown logging level '{}'", self.level))
        })
    }
}

impl ClockConfig {
    pub fn validate(&self) -> Result<(), ClockError> {
        if self.session.prompt.is_empty() {
            return Err(ClockError::ConfigError(
                "Session prompt cannot be empty".to_string(),
            ));
        }

        if self.references.len() != REFERENCE_COUNT {
            return Err(ClockError::ConfigError(format!(
                "Expected exactly {} references, found {}",
                REFERENCE_COUNT,
                self.references.len()
            )));
        }

        for reference in &self.references {
            if reference.label.trim().is_empty() {
                return Err(ClockError::ConfigError(
                    "Reference label cannot be empty".to_string(),
                ));
            }
            reference.to_time_of_day().map_err(|e| {
                ClockError::ConfigError(format!("Reference '{}': {}", reference.label, e))
            })?;
        }

        self.logging.level_filter()?;
        Ok(())
    }

    /// The reference instants as `(label, time)` pairs, in configured order.
    pub fn reference_instants(&self) -> Result<Vec<(String, TimeOfDay)>, ClockError> {
        self.references
            .iter()
            .map(|reference| -> Result<_, ClockError> {
                Ok((reference.label.clone(), reference.to_time_of_day()?))
            })
            .collect()
    }

    /// The value a new session starts from: midnight in the configured mode.
    pub fn initial_time(&self) -> TimeOfDay {
        TimeOfDay::with_mode(self.clock.mode_24_hour)
    }
}
