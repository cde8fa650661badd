//! A time of day with a 24-hour or 12-hour (AM/PM) display convention.
//!
//! The value is stored as a count of minutes since midnight plus a mode flag.
//! The mode only changes how the count is read and printed, never the count
//! itself, so toggling it back and forth is lossless.
//!
//! The relative shift operations keep the arithmetic of the class this type
//! replaces: `change_hour_by` wraps forward past the end of the day at most
//! once and never wraps backwards, and `change_minute_by` only behaves like a
//! minute shift near an hour boundary. Callers that need a normalized count
//! must not rely on either of them.

use crate::errors::OutOfRange;
use std::fmt;

pub const HOURS_PER_DAY: i32 = 24;
pub const HOURS_PER_HALF_DAY: i32 = HOURS_PER_DAY / 2;
pub const MINUTES_PER_HOUR: i32 = 60;
pub const MINUTES_PER_DAY: i32 = MINUTES_PER_HOUR * HOURS_PER_DAY;

pub const AM_DESIGNATION: &str = "AM";
pub const PM_DESIGNATION: &str = "PM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    minutes_since_midnight: i32,
    mode_24_hour: bool,
}

impl TimeOfDay {
    /// Midnight in 24-hour mode.
    pub fn new() -> Self {
        Self::with_mode(true)
    }

    /// Midnight in 24-hour mode when `mode_24_hour` is true, otherwise in
    /// 12-hour mode.
    pub fn with_mode(mode_24_hour: bool) -> Self {
        Self {
            minutes_since_midnight: 0,
            mode_24_hour,
        }
    }

    pub fn minutes_since_midnight(&self) -> i32 {
        self.minutes_since_midnight
    }

    pub fn is_mode_24_hour(&self) -> bool {
        self.mode_24_hour
    }

    /// Hour component as displayed in the current mode.
    ///
    /// In 12-hour mode AM hours are returned as-is (midnight is `0`) and PM
    /// hours have 12 subtracted (noon is `0`). There is no 12 AM / 12 PM
    /// adjustment.
    pub fn hour_of_day(&self) -> i32 {
        let hours = self.minutes_since_midnight / MINUTES_PER_HOUR;
        if self.mode_24_hour || hours < HOURS_PER_HALF_DAY {
            hours
        } else {
            hours - HOURS_PER_HALF_DAY
        }
    }

    pub fn minute_of_hour(&self) -> i32 {
        self.minutes_since_midnight % MINUTES_PER_HOUR
    }

    /// `""` in 24-hour mode, otherwise `"AM"` or `"PM"`.
    pub fn am_pm_designation(&self) -> &'static str {
        if self.mode_24_hour {
            ""
        } else if self.minutes_since_midnight / MINUTES_PER_HOUR < HOURS_PER_HALF_DAY {
            AM_DESIGNATION
        } else {
            PM_DESIGNATION
        }
    }

    /// Signed number of minutes `other` would have to move to become equal to
    /// `self`. Positive when `self` is later. No wraparound across midnight.
    pub fn compare_to(&self, other: &TimeOfDay) -> i32 {
        self.minutes_since_midnight
            .wrapping_sub(other.minutes_since_midnight)
    }

    /// Sets the hour as a 24-hour value. The minute resets to zero.
    pub fn set_hour(&mut self, hour: i32) -> Result<(), OutOfRange> {
        if !(0..HOURS_PER_DAY).contains(&hour) {
            return Err(OutOfRange::new("hour", hour));
        }
        self.minutes_since_midnight = hour * MINUTES_PER_HOUR;
        Ok(())
    }

    /// Sets the hour as a 12-hour AM value. The minute resets to zero.
    ///
    /// `12` maps to minute 720, which is noon.
    pub fn set_hour_am(&mut self, hour: i32) -> Result<(), OutOfRange> {
        if !(1..=HOURS_PER_HALF_DAY).contains(&hour) {
            return Err(OutOfRange::new("hour", hour));
        }
        self.minutes_since_midnight = hour * MINUTES_PER_HOUR;
        Ok(())
    }

    /// Sets the hour as a 12-hour PM value, keeping the current minute.
    pub fn set_hour_pm(&mut self, hour: i32) -> Result<(), OutOfRange> {
        if !(1..=HOURS_PER_HALF_DAY).contains(&hour) {
            return Err(OutOfRange::new("hour", hour));
        }
        self.minutes_since_midnight = self.minute_of_hour()
            + hour * MINUTES_PER_HOUR
            + HOURS_PER_HALF_DAY * MINUTES_PER_HOUR;
        Ok(())
    }

    pub fn set_minute_of_hour(&mut self, minute: i32) -> Result<(), OutOfRange> {
        if !(0..MINUTES_PER_HOUR).contains(&minute) {
            return Err(OutOfRange::new("minute", minute));
        }
        self.minutes_since_midnight = self
            .minutes_since_midnight
            .wrapping_sub(self.minute_of_hour())
            .wrapping_add(minute);
        Ok(())
    }

    pub fn toggle_mode(&mut self) {
        self.mode_24_hour = !self.mode_24_hour;
    }

    /// Moves the time by `hours_delta` hours, subtracting one day if the
    /// result lands beyond the end of the day.
    pub fn change_hour_by(&mut self, hours_delta: i32) {
        self.minutes_since_midnight = self
            .minutes_since_midnight
            .wrapping_add(hours_delta.wrapping_mul(MINUTES_PER_HOUR));
        if self.minutes_since_midnight > MINUTES_PER_DAY {
            self.minutes_since_midnight -= MINUTES_PER_DAY;
        }
    }

    /// Adds `minutes_delta + 60` and then takes one hour back off if the
    /// result is at least an hour.
    pub fn change_minute_by(&mut self, minutes_delta: i32) {
        self.minutes_since_midnight = self
            .minutes_since_midnight
            .wrapping_add(minutes_delta.wrapping_add(MINUTES_PER_HOUR));
        if self.minutes_since_midnight >= MINUTES_PER_HOUR {
            self.minutes_since_midnight -= MINUTES_PER_HOUR;
        }
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero pads to two digits; negative values keep their sign in front.
fn two_digits(value: i32) -> String {
    if value < 0 {
        format!("-{:02}", value.unsigned_abs())
    } else {
        format!("{:02}", value)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}{}",
            two_digits(self.hour_of_day()),
            two_digits(self.minute_of_hour()),
            self.am_pm_designation()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: i32, minute: i32) -> TimeOfDay {
        let mut time = TimeOfDay::new();
        time.set_hour(hour).unwrap();
        time.set_minute_of_hour(minute).unwrap();
        time
    }

    #[test]
    fn test_default_is_midnight_in_24_hour_mode() {
        let time = TimeOfDay::default();
        assert!(time.is_mode_24_hour());
        assert_eq!(time.minutes_since_midnight(), 0);
        assert_eq!(time.to_string(), "00:00");
    }

    #[test]
    fn test_twelve_hour_midnight() {
        let time = TimeOfDay::with_mode(false);
        assert!(!time.is_mode_24_hour());
        assert_eq!(time.am_pm_designation(), "AM");
        assert_eq!(time.to_string(), "00:00AM");
    }

    #[test]
    fn test_set_hour_accepts_every_valid_hour() {
        let mut time = at(7, 45);
        for hour in 0..24 {
            time.set_hour(hour).unwrap();
            assert_eq!(time.hour_of_day(), hour);
            assert_eq!(time.minute_of_hour(), 0);
        }
    }

    #[test]
    fn test_set_hour_rejects_out_of_range_and_keeps_state() {
        let mut time = at(9, 30);
        for hour in [-100, -1, 24, 25, i32::MAX, i32::MIN] {
            let err = time.set_hour(hour).unwrap_err();
            assert_eq!(err, OutOfRange::new("hour", hour));
            assert_eq!(time, at(9, 30));
        }
    }

    #[test]
    fn test_set_minute_preserves_hour() {
        let mut time = at(13, 5);
        for minute in 0..60 {
            time.set_minute_of_hour(minute).unwrap();
            assert_eq!(time.hour_of_day(), 13);
            assert_eq!(time.minute_of_hour(), minute);
        }
        assert_eq!(
            time.set_minute_of_hour(60),
            Err(OutOfRange::new("minute", 60))
        );
        assert_eq!(
            time.set_minute_of_hour(-1),
            Err(OutOfRange::new("minute", -1))
        );
        assert_eq!(time.minute_of_hour(), 59);
    }

    #[test]
    fn test_format_in_both_modes() {
        let mut time = at(14, 15);
        assert_eq!(time.to_string(), "14:15");
        time.toggle_mode();
        assert_eq!(time.to_string(), "02:15PM");
    }

    #[test]
    fn test_twelve_hour_noon_and_midnight_render_as_zero() {
        let mut time = TimeOfDay::with_mode(false);
        time.set_hour(12).unwrap();
        assert_eq!(time.hour_of_day(), 0);
        assert_eq!(time.to_string(), "00:00PM");
        time.set_hour(0).unwrap();
        assert_eq!(time.to_string(), "00:00AM");
    }

    #[test]
    fn test_toggle_mode_twice_is_identity() {
        let original = at(18, 42);
        let mut time = original;
        time.toggle_mode();
        assert!(!time.is_mode_24_hour());
        assert_eq!(time.minutes_since_midnight(), original.minutes_since_midnight());
        time.toggle_mode();
        assert_eq!(time, original);
    }

    #[test]
    fn test_set_hour_pm_then_minute() {
        let mut time = TimeOfDay::with_mode(false);
        time.set_hour_pm(5).unwrap();
        time.set_minute_of_hour(9).unwrap();
        assert_eq!(time.to_string(), "05:09PM");
    }

    #[test]
    fn test_set_hour_pm_preserves_minute() {
        let mut time = at(3, 27);
        time.set_hour_pm(4).unwrap();
        assert_eq!(time.minutes_since_midnight(), 16 * 60 + 27);
    }

    #[test]
    fn test_set_hour_am_resets_minute_and_twelve_is_noon() {
        let mut time = at(3, 27);
        time.set_hour_am(11).unwrap();
        assert_eq!(time.minutes_since_midnight(), 660);
        time.set_hour_am(12).unwrap();
        assert_eq!(time.minutes_since_midnight(), 720);
    }

    #[test]
    fn test_twelve_hour_setters_validate() {
        let mut time = at(6, 6);
        assert_eq!(time.set_hour_am(0), Err(OutOfRange::new("hour", 0)));
        assert_eq!(time.set_hour_am(13), Err(OutOfRange::new("hour", 13)));
        assert_eq!(time.set_hour_pm(0), Err(OutOfRange::new("hour", 0)));
        assert_eq!(time.set_hour_pm(13), Err(OutOfRange::new("hour", 13)));
        assert_eq!(time, at(6, 6));
    }

    #[test]
    fn test_set_hour_pm_twelve_runs_past_the_day() {
        let mut time = TimeOfDay::new();
        time.set_hour_pm(12).unwrap();
        assert_eq!(time.minutes_since_midnight(), 1440);
        assert_eq!(time.to_string(), "24:00");
    }

    #[test]
    fn test_compare_to_is_signed_and_antisymmetric() {
        let early = at(14, 15);
        let late = at(17, 33);
        assert_eq!(late.compare_to(&early), 198);
        assert_eq!(early.compare_to(&late), -198);
        assert_eq!(early.compare_to(&early), 0);
    }

    #[test]
    fn test_compare_to_ignores_mode() {
        let a = at(10, 0);
        let mut b = a;
        b.toggle_mode();
        assert_eq!(a.compare_to(&b), 0);
    }

    #[test]
    fn test_change_hour_by_wraps_once_forward() {
        let mut time = at(15, 0);
        time.change_hour_by(17);
        assert_eq!(time.minutes_since_midnight(), 480);
        assert_eq!(time.to_string(), "08:00");

        let mut time = at(15, 20);
        time.change_hour_by(17);
        assert_eq!(time.to_string(), "08:20");
    }

    #[test]
    fn test_change_hour_by_does_not_wrap_backwards() {
        let mut time = at(15, 0);
        time.change_hour_by(-17);
        assert_eq!(time.minutes_since_midnight(), -120);

        let mut time = at(15, 20);
        time.change_hour_by(-17);
        assert_eq!(time.minutes_since_midnight(), -100);
        assert_eq!(time.to_string(), "-01:-40");
    }

    #[test]
    fn test_change_hour_by_exactly_one_day_is_not_wrapped() {
        let mut time = TimeOfDay::new();
        time.change_hour_by(24);
        assert_eq!(time.minutes_since_midnight(), 1440);
    }

    #[test]
    fn test_change_hour_by_only_subtracts_a_single_day() {
        let mut time = at(1, 0);
        time.change_hour_by(48);
        assert_eq!(time.minutes_since_midnight(), 60 + 48 * 60 - 1440);
    }

    #[test]
    fn test_change_minute_by_small_deltas() {
        let mut time = at(15, 20);
        time.change_minute_by(17);
        assert_eq!(time.to_string(), "15:37");
        time.change_minute_by(-7);
        assert_eq!(time.to_string(), "15:30");
    }

    #[test]
    fn test_change_minute_by_near_midnight() {
        let mut time = TimeOfDay::new();
        time.change_minute_by(-30);
        // 0 + (-30 + 60) = 30, which is below an hour and kept as-is.
        assert_eq!(time.minutes_since_midnight(), 30);
    }

    #[test]
    fn test_shifts_wrap_instead_of_overflowing() {
        let mut time = TimeOfDay::new();
        time.change_hour_by(i32::MAX);
        time.change_minute_by(i32::MAX);
        let _ = time.to_string();
    }

    #[test]
    fn test_two_digits() {
        assert_eq!(two_digits(0), "00");
        assert_eq!(two_digits(7), "07");
        assert_eq!(two_digits(24), "24");
        assert_eq!(two_digits(123), "123");
        assert_eq!(two_digits(-2), "-02");
        assert_eq!(two_digits(-40), "-40");
    }
}
