//! Wall-clock times of day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute resolution, stored as minutes since midnight.
///
/// Parses from and displays as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Compile-time constructor for known-good constants.
    pub(crate) const fn at(hour: u16, minute: u16) -> Self {
        ClockTime(hour * 60 + minute)
    }

    /// Builds a time from hour and minute, or `None` when out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(ClockTime((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Builds a time from minutes since midnight, or `None` past 23:59.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(ClockTime(minutes as u16))
    }

    pub fn minutes(self) -> u32 {
        self.0 as u32
    }

    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// Minutes from `earlier` to `self`, wrapping past midnight.
    pub fn minutes_since(self, earlier: ClockTime) -> u32 {
        (self.minutes() + MINUTES_PER_DAY - earlier.minutes()) % MINUTES_PER_DAY
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (hour, minute) = token
            .split_once(':')
            .ok_or_else(|| TimetableError::parse(token, "expected HH:MM"))?;

        let field = |part: &str, name: &str| -> Result<u32, TimetableError> {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimetableError::parse(token, format!("malformed {name}")));
            }
            part.parse::<u32>()
                .map_err(|e| TimetableError::parse(token, format!("malformed {name}: {e}")))
        };

        let (hour, minute) = (field(hour, "hour")?, field(minute, "minute")?);
        ClockTime::new(hour, minute)
            .ok_or_else(|| TimetableError::parse(token, "time of day out of range"))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimetableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
