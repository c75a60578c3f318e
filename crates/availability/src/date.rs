use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AvailabilityError;

/// Timestamp format used by the reservation site's availability payloads.
pub const WEB_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// Dates are validated against a leap year so that Feb 29 is representable;
// whether a date has an offset in a given reference year is decided later.
const VALIDATION_YEAR: i32 = 2000;

/// A calendar day with no year attached, the unit of all availability data.
///
/// Renders and persists as zero-padded `MM/DD`. Ordering is numeric on
/// `(month, day)`, so `09/02` sorts before `10/01` regardless of how either
/// was written. Calendar arithmetic (`day_of_year`) happens within a single
/// reference year supplied by the caller; dates never span a year boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SiteDate {
    month: u8,
    day: u8,
}

impl SiteDate {
    /// Creates a date from month and day components.
    ///
    /// Rejects pairs that exist in no calendar year (month 13, Feb 30).
    /// Feb 29 is accepted; it only participates in interval grouping when
    /// the reference year is a leap year.
    pub fn new(month: u8, day: u8) -> Result<Self, AvailabilityError> {
        match NaiveDate::from_ymd_opt(VALIDATION_YEAR, u32::from(month), u32::from(day)) {
            Some(_) => Ok(SiteDate { month, day }),
            None => Err(AvailabilityError::NoSuchDay { month, day }),
        }
    }

    /// Parses a web-format timestamp (`2019-08-02T00:00:00Z`), dropping the
    /// year and time-of-day components.
    pub fn from_web_timestamp(stamp: &str) -> Result<Self, AvailabilityError> {
        let parsed = NaiveDateTime::parse_from_str(stamp, WEB_DATE_FORMAT)
            .map_err(|_| AvailabilityError::InvalidWebDate(stamp.to_string()))?;
        Ok(SiteDate {
            month: parsed.month() as u8,
            day: parsed.day() as u8,
        })
    }

    /// Month component, 1-12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day-of-month component.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Days elapsed since Jan 1 of the given reference year, or `None` for a
    /// day that does not exist in that year (Feb 29 outside a leap year).
    ///
    /// Two dates are calendar-consecutive within a year exactly when their
    /// offsets differ by one. Offsets from different reference years are not
    /// comparable.
    pub fn day_of_year(&self, reference_year: i32) -> Option<i64> {
        NaiveDate::from_ymd_opt(reference_year, u32::from(self.month), u32::from(self.day))
            .map(|date| i64::from(date.ordinal0()))
    }
}

impl fmt::Display for SiteDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

impl FromStr for SiteDate {
    type Err = AvailabilityError;

    /// Parses the short display form. Zero padding is optional on input
    /// (`8/2` and `08/02` are the same day); output is always padded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AvailabilityError::InvalidShortDate(s.to_string());
        let (month, day) = s.split_once('/').ok_or_else(invalid)?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;
        SiteDate::new(month, day)
    }
}

impl Serialize for SiteDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SiteDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> SiteDate {
        s.parse().expect("test date should parse")
    }

    #[test]
    fn parses_web_timestamp() {
        let parsed = SiteDate::from_web_timestamp("2019-08-02T00:00:00Z").unwrap();
        assert_eq!(parsed, date("08/02"));
    }

    #[test]
    fn rejects_malformed_web_timestamps() {
        for bad in [
            "2019-08-02",
            "08/02",
            "2019-08-02 00:00:00",
            "2019-13-02T00:00:00Z",
            "2019-02-30T00:00:00Z",
            "",
        ] {
            assert!(SiteDate::from_web_timestamp(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn short_form_accepts_unpadded_input() {
        assert_eq!(date("8/2"), date("08/02"));
        assert_eq!(date("8/2").to_string(), "08/02");
    }

    #[test]
    fn rejects_malformed_short_dates() {
        for bad in ["", "08", "08/", "/02", "08-02", "aa/bb", "13/01", "02/30"] {
            assert!(bad.parse::<SiteDate>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn orders_numerically_not_lexicographically() {
        // "9/02" > "10/01" as strings; as dates September precedes October.
        assert!(date("9/02") < date("10/01"));
        assert!(date("07/31") < date("08/01"));
        assert!(date("08/01") < date("08/02"));
    }

    #[test]
    fn round_trips_every_day_of_the_reference_year() {
        let mut day = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
        while day <= end {
            let web = format!("{}T00:00:00Z", day.format("%Y-%m-%d"));
            let parsed = SiteDate::from_web_timestamp(&web).unwrap();
            assert_eq!(parsed.to_string(), day.format("%m/%d").to_string());
            assert_eq!(parsed, date(&parsed.to_string()));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn day_of_year_counts_from_january_first() {
        assert_eq!(date("01/01").day_of_year(2019), Some(0));
        assert_eq!(date("01/02").day_of_year(2019), Some(1));
        assert_eq!(date("12/31").day_of_year(2019), Some(364));
        // Cross-month neighbors differ by exactly one.
        let july_end = date("07/31").day_of_year(2019).unwrap();
        let aug_start = date("08/01").day_of_year(2019).unwrap();
        assert_eq!(aug_start - july_end, 1);
    }

    #[test]
    fn leap_day_exists_only_in_leap_years() {
        let leap_day = date("02/29");
        assert_eq!(leap_day.day_of_year(2019), None);
        assert_eq!(leap_day.day_of_year(2020), Some(59));
    }

    #[test]
    fn serde_uses_the_short_form() {
        let json = serde_json::to_string(&date("08/02")).unwrap();
        assert_eq!(json, "\"08/02\"");
        let back: SiteDate = serde_json::from_str("\"8/2\"").unwrap();
        assert_eq!(back, date("08/02"));
        assert!(serde_json::from_str::<SiteDate>("\"02/30\"").is_err());
    }
}
