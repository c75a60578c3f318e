use std::time::Duration;

use chrono::Local;
use tracing::{info, warn};

use crate::directory::SiteDirectory;
use crate::error::BookingError;
use crate::request::BookingRequest;

/// Reservation endpoint that moves a site into the visitor's cart.
pub const BOOKING_URL: &str = "https://www.recreation.gov/switchBookingAction.do";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Submits booking requests to the reservation endpoint.
pub struct BookingClient {
    client: reqwest::Client,
    booking_url: String,
}

impl BookingClient {
    /// Creates a client with a cookie store, so repeated attempts share
    /// one session the way a browser would.
    pub fn new() -> Result<Self, BookingError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            booking_url: BOOKING_URL.to_string(),
        })
    }

    /// Submits the request, retrying up to the configured attempt count.
    ///
    /// A 2xx response counts as success; the body is not inspected.
    /// Returns the number of the attempt that succeeded. Transport errors
    /// abort immediately rather than burning remaining attempts.
    pub async fn submit(
        &self,
        request: &BookingRequest,
        directory: &SiteDirectory,
    ) -> Result<u32, BookingError> {
        let fields = request.form_fields(directory);

        for attempt in 1..=request.attempts {
            info!(
                attempt,
                site = request.site,
                at = %Local::now().format("%H:%M:%S%.3f"),
                "submitting booking request"
            );

            let response = self
                .client
                .post(&self.booking_url)
                .form(&fields)
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                info!(attempt, %status, "booking request accepted");
                return Ok(attempt);
            }
            if attempt == request.attempts {
                return Err(BookingError::Refused {
                    attempts: attempt,
                    last_status: status,
                });
            }
            warn!(attempt, %status, "booking request refused, retrying");
        }

        // A request configured with zero attempts never fires.
        Err(BookingError::NoAttempts)
    }
}
