use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveTime};

use crate::error::BookingError;

/// Wall-clock time of day at which the booking fires.
///
/// Site inventory opens at a known instant, so the target is always
/// today: a time that has already passed is an error, not tomorrow's
/// occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTime(NaiveTime);

impl TargetTime {
    /// The instant today at this time of day, if it is still ahead of
    /// `now`.
    pub fn next_occurrence(&self, now: DateTime<Local>) -> Result<DateTime<Local>, BookingError> {
        let target = now
            .with_time(self.0)
            .single()
            .ok_or_else(|| BookingError::InvalidTargetTime(self.to_string()))?;
        if target <= now {
            return Err(BookingError::TargetTimePassed(self.to_string()));
        }
        Ok(target)
    }

    /// How long to sleep from `now` until the target fires.
    pub fn wait_from(&self, now: DateTime<Local>) -> Result<Duration, BookingError> {
        let target = self.next_occurrence(now)?;
        Ok((target - now).to_std().unwrap_or_default())
    }
}

impl FromStr for TargetTime {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];
        FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(s, format).ok())
            .map(Self)
            .ok_or_else(|| BookingError::InvalidTargetTime(s.to_string()))
    }
}

impl fmt::Display for TargetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S%.3f"))
    }
}
