//! Clock values (`H:M`) as offsets from midnight.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone};

use crate::error::{TimelogError, TimelogResult};

/// Hours and minutes past midnight. Neither part is range-checked, so
/// `25:90` is a valid clock that lands on the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32) -> Self {
        ClockTime { hours, minutes }
    }

    pub fn offset(&self) -> Duration {
        Duration::hours(i64::from(self.hours)) + Duration::minutes(i64::from(self.minutes))
    }

    /// Absolute time reached by adding this offset to `midnight`.
    pub fn after<Tz: TimeZone>(&self, midnight: &DateTime<Tz>) -> TimelogResult<DateTime<Tz>> {
        midnight
            .clone()
            .checked_add_signed(self.offset())
            .ok_or_else(|| TimelogError::ClockParse {
                token: self.to_string(),
                reason: "time is out of range".to_string(),
            })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for ClockTime {
    type Err = TimelogError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| TimelogError::ClockParse {
            token: token.to_string(),
            reason,
        };

        let (hours, minutes) = token
            .split_once(':')
            .ok_or_else(|| invalid("expected H:M".to_string()))?;

        if minutes.contains(':') {
            return Err(invalid("expected H:M".to_string()));
        }

        let hours = hours
            .parse::<u32>()
            .map_err(|e| invalid(format!("hours: {}", e)))?;
        let minutes = minutes
            .parse::<u32>()
            .map_err(|e| invalid(format!("minutes: {}", e)))?;

        Ok(ClockTime { hours, minutes })
    }
}
