use std::time::Duration;

use availability::CampgroundMonth;
use reqwest::{Client, header};
use tracing::{debug, info};

use crate::error::RecGovError;

const INTERNAL_API_BASE: &str = "https://www.recreation.gov/api";
const RECREATION_GOV_ORIGIN: &str = "https://www.recreation.gov";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Client for the recreation.gov internal campground availability API.
///
/// The month endpoint sits behind the public site, not the documented RIDB
/// API, so requests carry a browser-like user agent plus the origin and
/// referer headers the availability page itself sends. One GET per month,
/// no retries.
pub struct RecGovClient {
    client: Client,
    base_url: String,
}

impl RecGovClient {
    /// Creates a client with browser-like headers, a cookie store, and a
    /// 30 second timeout.
    pub fn new() -> Result<Self, RecGovError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ORIGIN,
            header::HeaderValue::from_static(RECREATION_GOV_ORIGIN),
        );

        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers)
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: INTERNAL_API_BASE.to_string(),
        })
    }

    /// Fetches one month of per-campsite availability for a campground.
    ///
    /// `month` is 1-12 and is validated before any I/O. The payload shape is
    /// checked by typed deserialization; anything else is
    /// [`RecGovError::Malformed`].
    pub async fn fetch_month(
        &self,
        campground_id: u32,
        year: i32,
        month: u32,
    ) -> Result<CampgroundMonth, RecGovError> {
        if !(1..=12).contains(&month) {
            return Err(RecGovError::InvalidMonth(month));
        }

        let url = month_url(&self.base_url, campground_id, year, month);
        debug!(campground_id, year, month, "fetching availability month");

        let response = self
            .client
            .get(&url)
            .header(header::REFERER, campground_referer(campground_id))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(match status.as_u16() {
                429 => RecGovError::RateLimited,
                401 | 403 => RecGovError::AccessDenied,
                404 => RecGovError::CampgroundNotFound(campground_id),
                _ => RecGovError::Api(status),
            });
        }

        let month_data: CampgroundMonth = response
            .json()
            .await
            .map_err(|e| RecGovError::Malformed(e.to_string()))?;

        debug!(
            campground_id,
            campsites = month_data.campsites.len(),
            "fetched availability month"
        );
        Ok(month_data)
    }

    /// Fetches several months in order, failing fast on the first error.
    pub async fn fetch_months(
        &self,
        campground_id: u32,
        year: i32,
        months: &[u32],
    ) -> Result<Vec<CampgroundMonth>, RecGovError> {
        let mut fragments = Vec::with_capacity(months.len());
        for &month in months {
            fragments.push(self.fetch_month(campground_id, year, month).await?);
        }
        info!(
            campground_id,
            months = months.len(),
            "fetched availability payloads"
        );
        Ok(fragments)
    }
}

fn month_url(base_url: &str, campground_id: u32, year: i32, month: u32) -> String {
    format!(
        "{base_url}/camps/availability/campground/{campground_id}/month?start_date={year:04}-{month:02}-01T00:00:00.000Z"
    )
}

fn campground_referer(campground_id: u32) -> String {
    format!("{RECREATION_GOV_ORIGIN}/camping/campgrounds/{campground_id}/availability")
}
