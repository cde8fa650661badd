//! One-character commands understood by the command session.

use crate::errors::OutOfRange;
use crate::time_of_day::TimeOfDay;

/// Usage line printed for an unrecognized command.
pub const USAGE: &str = "Valid commands: q d h a p m t H M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Display,
    SetHour24,
    SetHourAm,
    SetHourPm,
    SetMinute,
    ToggleMode,
    ChangeHourBy,
    ChangeMinuteBy,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Quit,
        Command::Display,
        Command::SetHour24,
        Command::SetHourAm,
        Command::SetHourPm,
        Command::SetMinute,
        Command::ToggleMode,
        Command::ChangeHourBy,
        Command::ChangeMinuteBy,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.as_char() == c)
    }

    /// Reads the command from the first non-whitespace character of a line.
    pub fn from_line(line: &str) -> Option<Self> {
        line.trim_start().chars().next().and_then(Self::from_char)
    }

    pub fn as_char(self) -> char {
        match self {
            Command::Quit => 'q',
            Command::Display => 'd',
            Command::SetHour24 => 'h',
            Command::SetHourAm => 'a',
            Command::SetHourPm => 'p',
            Command::SetMinute => 'm',
            Command::ToggleMode => 't',
            Command::ChangeHourBy => 'H',
            Command::ChangeMinuteBy => 'M',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Display => "display",
            Command::SetHour24 => "set-hour-24",
            Command::SetHourAm => "set-hour-am",
            Command::SetHourPm => "set-hour-pm",
            Command::SetMinute => "set-minute",
            Command::ToggleMode => "toggle-mode",
            Command::ChangeHourBy => "change-hour-by",
            Command::ChangeMinuteBy => "change-minute-by",
        }
    }

    pub fn takes_argument(self) -> bool {
        matches!(
            self,
            Command::SetHour24
                | Command::SetHourAm
                | Command::SetHourPm
                | Command::SetMinute
                | Command::ChangeHourBy
                | Command::ChangeMinuteBy
        )
    }

    /// Runs the command against `time`. `argument` is ignored by commands
    /// that take none. `Quit` does nothing here; stopping is up to the caller.
    pub fn apply(self, time: &mut TimeOfDay, argument: i32) -> Result<(), OutOfRange> {
        match self {
            Command::Quit | Command::Display => Ok(()),
            Command::SetHour24 => time.set_hour(argument),
            Command::SetHourAm => time.set_hour_am(argument),
            Command::SetHourPm => time.set_hour_pm(argument),
            Command::SetMinute => time.set_minute_of_hour(argument),
            Command::ToggleMode => {
                time.toggle_mode();
                Ok(())
            }
            Command::ChangeHourBy => {
                time.change_hour_by(argument);
                Ok(())
            }
            Command::ChangeMinuteBy => {
                time.change_minute_by(argument);
                Ok(())
            }
        }
    }
}

/// Parses an argument line as an integer; anything unparseable is `0`.
pub fn parse_argument(line: &str) -> i32 {
    line.trim().parse().unwrap_or(0)
}
