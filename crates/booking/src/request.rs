use chrono::NaiveDate;

use crate::directory::SiteDirectory;

/// One booking submission: which site, when, and for how long.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Human campsite number.
    pub site: u32,
    /// First night of the stay.
    pub arrival: NaiveDate,
    /// Length of stay in nights.
    pub nights: u32,
    /// How many times to submit before giving up.
    pub attempts: u32,
}

impl BookingRequest {
    /// Builds the form fields the reservation endpoint expects.
    ///
    /// The arrival date is rendered with unpadded month and day
    /// (`7/14/2018`), the only form the endpoint accepts.
    pub fn form_fields(&self, directory: &SiteDirectory) -> Vec<(&'static str, String)> {
        vec![
            ("contractCode", "NRSO".to_string()),
            ("parkId", directory.park_id.to_string()),
            ("siteId", directory.resolve(self.site).to_string()),
            ("lengthOfStay", self.nights.to_string()),
            ("dateChosen", "true".to_string()),
            ("arvdate", self.arrival.format("%-m/%-d/%Y").to_string()),
        ]
    }
}
