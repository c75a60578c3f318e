/// Custom error type for availability normalization
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    /// A date key in a payload did not match the web timestamp format
    #[error("Invalid web date: '{0}' is not a YYYY-MM-DDTHH:MM:SSZ timestamp")]
    InvalidWebDate(String),

    /// A short-form date string did not match MM/DD
    #[error("Invalid short date: '{0}' is not an MM/DD date")]
    InvalidShortDate(String),

    /// A month/day pair that exists in no calendar year
    #[error("Invalid calendar day: month {month} has no day {day}")]
    NoSuchDay {
        /// Month component, 1-12
        month: u8,
        /// Day-of-month component
        day: u8,
    },
}
