use std::collections::HashMap;

use serde::Deserialize;

/// Status string marking a bookable day. Matching is exact and
/// case-sensitive; every other status (`Reserved`, `Closed`,
/// `Not Reservable`, ...) means the day cannot be booked.
pub const STATUS_AVAILABLE: &str = "Available";

/// One month of raw availability data for a campground, as returned by the
/// reservation site's internal month endpoint.
///
/// Any response missing this structure is malformed and fails
/// deserialization; the poll treats that as fatal rather than guessing.
#[derive(Debug, Clone, Deserialize)]
pub struct CampgroundMonth {
    /// Campsite records keyed by an opaque internal campsite id.
    pub campsites: HashMap<String, CampsiteRecord>,
}

/// A single campsite's per-day availability within one month.
#[derive(Debug, Clone, Deserialize)]
pub struct CampsiteRecord {
    /// Human-facing site identifier, e.g. `"001"`. Not always numeric;
    /// group sites carry labels like `"A12"`.
    pub site: String,
    /// Status string per web-format date key.
    pub availabilities: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_month_endpoint_shape() {
        let raw = r#"{
            "campsites": {
                "4397": {
                    "site": "001",
                    "availabilities": {
                        "2019-08-01T00:00:00Z": "Reserved",
                        "2019-08-02T00:00:00Z": "Available"
                    },
                    "campsite_type": "STANDARD NONELECTRIC",
                    "loop": "LOOP 1"
                }
            },
            "count": 1
        }"#;
        let month: CampgroundMonth = serde_json::from_str(raw).unwrap();
        let record = &month.campsites["4397"];
        assert_eq!(record.site, "001");
        assert_eq!(
            record.availabilities["2019-08-02T00:00:00Z"],
            STATUS_AVAILABLE
        );
    }

    #[test]
    fn missing_campsites_key_is_rejected() {
        assert!(serde_json::from_str::<CampgroundMonth>(r#"{"count": 0}"#).is_err());
    }

    #[test]
    fn missing_site_field_is_rejected() {
        let raw = r#"{"campsites": {"4397": {"availabilities": {}}}}"#;
        assert!(serde_json::from_str::<CampgroundMonth>(raw).is_err());
    }

    #[test]
    fn missing_availabilities_field_is_rejected() {
        let raw = r#"{"campsites": {"4397": {"site": "001"}}}"#;
        assert!(serde_json::from_str::<CampgroundMonth>(raw).is_err());
    }
}
