/// Custom error type for recreation.gov API access
#[derive(thiserror::Error, Debug)]
pub enum RecGovError {
    /// HTTP transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Rate limited by the availability API
    #[error("Rate limited by recreation.gov")]
    RateLimited,

    /// Request rejected as unauthenticated or forbidden
    #[error("Access denied by recreation.gov")]
    AccessDenied,

    /// Campground id not recognized by the API
    #[error("Campground {0} not found")]
    CampgroundNotFound(u32),

    /// Any other non-success HTTP status
    #[error("API error: HTTP {0}")]
    Api(reqwest::StatusCode),

    /// Response body did not match the month payload shape
    #[error("Malformed availability payload: {0}")]
    Malformed(String),

    /// Requested month outside 1-12
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
}
