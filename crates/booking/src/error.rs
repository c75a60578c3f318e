/// Errors produced while scheduling or submitting a booking request.
#[derive(thiserror::Error, Debug)]
pub enum BookingError {
    /// The target time string did not parse.
    #[error("Invalid target time: '{0}' is not in HH:MM, HH:MM:SS, or HH:MM:SS.mmm form")]
    InvalidTargetTime(String),

    /// The requested firing time is not in the future.
    #[error("Target time {0} has already passed today")]
    TargetTimePassed(String),

    /// The request was configured with zero submission attempts.
    #[error("Booking requires at least one attempt")]
    NoAttempts,

    /// The HTTP request could not be sent or completed.
    #[error("Booking request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Every configured attempt drew a non-success response.
    #[error("Booking refused after {attempts} attempt(s), last status {last_status}")]
    Refused {
        /// Number of attempts made.
        attempts: u32,
        /// HTTP status of the final refusal.
        last_status: reqwest::StatusCode,
    },

    /// The site directory file could not be read.
    #[error("Failed to read site directory: {0}")]
    DirectoryIo(#[from] std::io::Error),

    /// The site directory file did not hold the expected JSON shape.
    #[error("Failed to parse site directory: {0}")]
    DirectoryFormat(#[from] serde_json::Error),
}
